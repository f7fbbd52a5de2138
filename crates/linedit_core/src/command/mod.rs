//! Reversible edit commands.
//!
//! # Responsibility
//! - Model every editor operation as a value that can execute and undo.
//! - Map validation, range and storage failures onto one error taxonomy.
//!
//! # Invariants
//! - A command captures the state needed to invert itself during execute.
//! - Positions reported in errors are 1-based, as the user typed them.

use crate::model::record::RequestParseError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod edit_command;

pub type CommandResult<T> = Result<T, CommandError>;

/// Coarse failure category, stable across message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    OutOfRange,
    NotFound,
    EmptyHistory,
    IoFailure,
    NotInvertible,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::OutOfRange => "out_of_range",
            Self::NotFound => "not_found",
            Self::EmptyHistory => "empty_history",
            Self::IoFailure => "io_failure",
            Self::NotInvertible => "not_invertible",
        }
    }
}

/// Command execution/undo error.
#[derive(Debug)]
pub enum CommandError {
    /// Malformed request or failed field validation.
    InvalidInput(String),
    /// 1-based `position` outside the current store.
    OutOfRange { position: usize, len: usize },
    /// Nothing to act on (empty store).
    NotFound(String),
    /// Undo requested with no history.
    EmptyHistory,
    /// List cannot be undone.
    NotInvertible,
    /// Undo requested for a command that never executed.
    NotExecuted(&'static str),
    /// Backing file failure.
    Store(StoreError),
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) | Self::NotExecuted(_) => ErrorKind::InvalidInput,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::EmptyHistory => ErrorKind::EmptyHistory,
            Self::NotInvertible => ErrorKind::NotInvertible,
            Self::Store(_) => ErrorKind::IoFailure,
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::OutOfRange { position, len } => {
                write!(f, "position {position} is out of range for {len} line(s)")
            }
            Self::NotFound(message) => write!(f, "{message}"),
            Self::EmptyHistory => write!(f, "command history is empty, nothing to undo"),
            Self::NotInvertible => write!(f, "list command is not undoable"),
            Self::NotExecuted(label) => write!(f, "{label} command has not been executed"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for CommandError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::OutOfRange { index, len } => Self::OutOfRange {
                position: index + 1,
                len,
            },
            StoreError::Empty => Self::NotFound("no lines to undo".to_string()),
            other => Self::Store(other),
        }
    }
}

impl From<RequestParseError> for CommandError {
    fn from(value: RequestParseError) -> Self {
        Self::InvalidInput(value.to_string())
    }
}
