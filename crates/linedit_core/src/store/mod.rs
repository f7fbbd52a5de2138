//! Persistence layer for record lines.
//!
//! # Responsibility
//! - Own the ordered line sequence and its backing flat file.
//! - Report storage failures as typed errors with the offending path.
//!
//! # Invariants
//! - The file is always rewritten wholesale from memory; lines are never
//!   patched in place.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod line_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Line store error for file I/O and positional access.
#[derive(Debug)]
pub enum StoreError {
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    OutOfRange {
        index: usize,
        len: usize,
    },
    Empty,
}

impl StoreError {
    /// Returns whether this error came from the file system.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::Create { .. } | Self::Read { .. } | Self::Write { .. }
        )
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create { path, source } => {
                write!(f, "failed to create file `{}`: {source}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "failed to read file `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write file `{}`: {source}", path.display())
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} is out of bounds for {len} line(s)")
            }
            Self::Empty => write!(f, "no lines in store"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Create { source, .. } | Self::Read { source, .. } | Self::Write { source, .. } => {
                Some(source)
            }
            Self::OutOfRange { .. } | Self::Empty => None,
        }
    }
}
