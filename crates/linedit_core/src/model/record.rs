//! Record model, canonical line formatting and request decoding.
//!
//! # Responsibility
//! - Define the three-field record and its single-line storage form.
//! - Define structured add/update requests consumed by commands.
//! - Decode the legacy `;`-delimited request encodings at the edge.
//!
//! # Invariants
//! - First and last names are title-cased on every write.
//! - Contact is title-cased only when it is a plain token, never when it is
//!   a strict email.
//! - Request positions are 1-based; commands convert them to 0-based.

use crate::validate::validate_email;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field separator of the stored line format.
pub const LINE_FIELD_SEPARATOR: &str = " ";
/// Field separator of the legacy request encodings.
pub const REQUEST_FIELD_SEPARATOR: char = ';';
/// Number of `;` parts an add request must carry.
pub const ADD_REQUEST_FIELD_COUNT: usize = 3;

const UPDATE_REQUEST_MIN_FIELDS: usize = 2;

/// Decoding error for raw request strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestParseError {
    /// Input is empty or whitespace-only.
    Blank,
    /// Add input does not split into exactly three parts.
    FieldCount { expected: usize, actual: usize },
    /// Update input lacks the mandatory first-name part.
    MissingFirstName,
    /// Position part is not a decimal integer.
    InvalidPosition(String),
}

impl Display for RequestParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "input string cannot be empty"),
            Self::FieldCount { expected, actual } => write!(
                f,
                "input must contain exactly {expected} parts separated by `;`, got {actual}"
            ),
            Self::MissingFirstName => {
                write!(f, "update input must contain a position and a first name")
            }
            Self::InvalidPosition(value) => write!(f, "invalid position `{value}`"),
        }
    }
}

impl Error for RequestParseError {}

/// One stored record split into its logical fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    /// Email address or plain word token.
    pub contact: String,
}

impl Record {
    /// Builds a canonical record from raw input fields.
    pub fn from_input(first_name: &str, last_name: &str, contact: &str) -> Self {
        Self {
            first_name: title_case(first_name.trim()),
            last_name: title_case(last_name.trim()),
            contact: normalize_contact(contact.trim()),
        }
    }

    /// Splits a stored line into exactly three fields.
    ///
    /// Returns `None` for lines that do not have three space-separated
    /// fields (for example hand-edited files).
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split(LINE_FIELD_SEPARATOR);
        let first_name = parts.next()?.to_string();
        let last_name = parts.next()?.to_string();
        let contact = parts.next()?.to_string();
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            first_name,
            last_name,
            contact,
        })
    }

    /// Joins the fields with single spaces.
    pub fn to_line(&self) -> String {
        format!("{} {} {}", self.first_name, self.last_name, self.contact)
    }
}

/// Structured add request: the three record fields, untrimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRequest {
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
}

impl AddRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            contact: contact.into(),
        }
    }

    /// Decodes `"<first>;<last>;<contact>"`.
    pub fn parse(input: &str) -> Result<Self, RequestParseError> {
        if input.trim().is_empty() {
            return Err(RequestParseError::Blank);
        }

        let parts = split_request(input);
        if parts.len() != ADD_REQUEST_FIELD_COUNT {
            return Err(RequestParseError::FieldCount {
                expected: ADD_REQUEST_FIELD_COUNT,
                actual: parts.len(),
            });
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

/// Structured update request.
///
/// `last_name` and `contact` are optional trailing fields; absent fields
/// keep the stored value. An empty `contact` also keeps the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// 1-based position of the target line.
    pub position: usize,
    pub first_name: String,
    pub last_name: Option<String>,
    pub contact: Option<String>,
}

impl UpdateRequest {
    pub fn new(position: usize, first_name: impl Into<String>) -> Self {
        Self {
            position,
            first_name: first_name.into(),
            last_name: None,
            contact: None,
        }
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Decodes `"<position>;<first>[;<last>[;<contact>]]"`.
    ///
    /// Trailing empty parts are dropped before counting and parts beyond the
    /// fourth are ignored.
    pub fn parse(input: &str) -> Result<Self, RequestParseError> {
        if input.trim().is_empty() {
            return Err(RequestParseError::Blank);
        }

        let parts = split_request(input);
        if parts.len() < UPDATE_REQUEST_MIN_FIELDS {
            return Err(RequestParseError::MissingFirstName);
        }

        Ok(Self {
            position: parse_position(parts[0])?,
            first_name: parts[1].to_string(),
            last_name: parts.get(2).map(|value| value.to_string()),
            contact: parts.get(3).map(|value| value.to_string()),
        })
    }
}

/// Parses a 1-based decimal position, ignoring surrounding whitespace.
pub fn parse_position(input: &str) -> Result<usize, RequestParseError> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| RequestParseError::InvalidPosition(trimmed.to_string()))
}

/// Formats raw add fields into the canonical stored line.
pub fn format_new_line(first_name: &str, last_name: &str, contact: &str) -> String {
    Record::from_input(first_name, last_name, contact).to_line()
}

/// Title-cases a trimmed contact when it is a plain token.
///
/// Strict emails and unclassified values are returned verbatim.
pub fn normalize_contact(contact: &str) -> String {
    if validate_email(contact).is_plain_token {
        title_case(contact)
    } else {
        contact.to_string()
    }
}

/// Uppercases the first letter of each whitespace-delimited run and
/// lowercases the rest. Whitespace is preserved as-is.
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            output.push(ch);
        } else if at_word_start {
            output.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            output.extend(ch.to_lowercase());
        }
    }

    output
}

// Mirrors the legacy splitter: trailing empty parts do not count.
fn split_request(input: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = input.split(REQUEST_FIELD_SEPARATOR).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}
