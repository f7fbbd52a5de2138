//! Core logic for the linedit record editor.
//! This crate owns record validation, the line store and the undo protocol.

pub mod command;
pub mod logging;
pub mod model;
pub mod session;
pub mod store;
pub mod validate;

pub use command::edit_command::{Command, CommandOutcome};
pub use command::{CommandError, CommandResult, ErrorKind};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{
    format_new_line, title_case, AddRequest, Record, RequestParseError, UpdateRequest,
};
pub use session::history::UndoHistory;
pub use session::invoker::{BatchFailure, Invoker, RunReport};
pub use session::EditSession;
pub use store::line_store::LineStore;
pub use store::{StoreError, StoreResult};
pub use validate::{are_valid_names, validate_email, ContactCheck};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
