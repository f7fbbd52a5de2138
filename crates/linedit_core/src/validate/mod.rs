//! Field validation rules for record input.
//!
//! # Responsibility
//! - Decide whether candidate name fields are acceptable.
//! - Classify contact values as strict emails or plain word tokens.
//!
//! # Invariants
//! - Validators are pure: no logging, no I/O, no mutation of input.
//! - Contact patterns must match the whole candidate, never a substring.
//!
//! # See also
//! - `model::record` for how validated fields are formatted.

use once_cell::sync::Lazy;
use regex::Regex;

// `regex` has no look-around. Every run of the local part and the domain
// starts and ends on a word character, which keeps `.`/`-` away from `@`,
// from the final dot and from each other.
static STRICT_EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_]+(?:[.-][A-Za-z0-9_]+)*@[A-Za-z0-9]+(?:[.-][A-Za-z0-9]+)*\.[a-z]{2,3}$",
    )
    .expect("valid strict email regex")
});
static PLAIN_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid plain token regex"));

/// Classification of one contact candidate.
///
/// A candidate can satisfy at most one of the two checks in practice: an
/// email always carries `@`, which a plain token never does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactCheck {
    /// Matches `local@domain.tld`.
    pub is_strict_email: bool,
    /// Word characters only (`[A-Za-z0-9_]+`).
    pub is_plain_token: bool,
}

impl ContactCheck {
    /// Returns whether the candidate may be stored as a contact.
    pub fn is_acceptable(self) -> bool {
        self.is_strict_email || self.is_plain_token
    }
}

/// Classifies a contact candidate.
///
/// Empty input yields `ContactCheck { false, false }`. The candidate is
/// matched as given; callers trim before calling.
pub fn validate_email(candidate: &str) -> ContactCheck {
    if candidate.is_empty() {
        return ContactCheck::default();
    }

    ContactCheck {
        is_strict_email: STRICT_EMAIL_RE.is_match(candidate),
        is_plain_token: PLAIN_TOKEN_RE.is_match(candidate),
    }
}

/// Returns `true` when every name candidate is non-blank.
///
/// Candidates containing `@` are skipped: they are contact values that
/// travelled in the same field list.
pub fn are_valid_names<S: AsRef<str>>(names: &[S]) -> bool {
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !name.contains('@'))
        .all(|name| !name.trim().is_empty())
}
