//! Edit command variants and their execute/undo contracts.
//!
//! # Responsibility
//! - Validate and apply add/delete/update/list requests to a session store.
//! - Invert an executed command using only the state it captured.
//! - Pop and invert the latest history entry for `Undo`.
//!
//! # Invariants
//! - `Add` undo removes the *last* line. This round-trips only while undo
//!   order matches the history's LIFO order, which one session guarantees.
//! - `Delete` and `Update` address an existing line (`index < len`).
//! - Undoing `Undo` performs another undo, not a redo.
//! - Undo of a command that never executed fails with `NotExecuted`.

use super::{CommandError, CommandResult};
use crate::model::record::{
    format_new_line, normalize_contact, parse_position, title_case, AddRequest, UpdateRequest,
    LINE_FIELD_SEPARATOR,
};
use crate::session::EditSession;
use crate::store::line_store::LineStore;
use crate::validate::{are_valid_names, validate_email};
use log::debug;

const FIRST_NAME_FIELD: usize = 0;
const LAST_NAME_FIELD: usize = 1;
const CONTACT_FIELD: usize = 2;

/// Result of a successful execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Store or history was changed.
    Applied,
    /// Every stored line, in order.
    Listed(Vec<String>),
}

/// One editor operation plus the state captured to reverse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        request: AddRequest,
        /// Formatted line appended by execute.
        appended: Option<String>,
    },
    Delete {
        /// Zero-based target index.
        index: usize,
        removed: Option<String>,
    },
    Update {
        /// Zero-based target index.
        index: usize,
        request: UpdateRequest,
        previous: Option<String>,
    },
    List,
    Undo,
}

impl Command {
    pub fn add(request: AddRequest) -> Self {
        Self::Add {
            request,
            appended: None,
        }
    }

    /// Builds an add command from `"<first>;<last>;<contact>"`.
    pub fn parse_add(input: &str) -> CommandResult<Self> {
        Ok(Self::add(AddRequest::parse(input)?))
    }

    /// Builds a delete command for a 1-based `position`.
    pub fn delete(position: usize) -> CommandResult<Self> {
        Ok(Self::Delete {
            index: zero_based(position)?,
            removed: None,
        })
    }

    /// Builds a delete command from a decimal 1-based position.
    pub fn parse_delete(input: &str) -> CommandResult<Self> {
        Self::delete(parse_position(input)?)
    }

    /// Builds an update command; `request.position` is 1-based.
    pub fn update(request: UpdateRequest) -> CommandResult<Self> {
        Ok(Self::Update {
            index: zero_based(request.position)?,
            request,
            previous: None,
        })
    }

    /// Builds an update command from `"<position>;<first>[;<last>[;<contact>]]"`.
    pub fn parse_update(input: &str) -> CommandResult<Self> {
        Self::update(UpdateRequest::parse(input)?)
    }

    pub fn list() -> Self {
        Self::List
    }

    pub fn undo_last() -> Self {
        Self::Undo
    }

    /// Stable lowercase name used in logs and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Delete { .. } => "delete",
            Self::Update { .. } => "update",
            Self::List => "list",
            Self::Undo => "undo",
        }
    }

    /// Whether a successful execute belongs in the undo history.
    pub fn is_reversible(&self) -> bool {
        !matches!(self, Self::List)
    }

    /// Line captured for the inverse: appended, removed or pre-update line.
    pub fn captured_line(&self) -> Option<&str> {
        match self {
            Self::Add { appended, .. } => appended.as_deref(),
            Self::Delete { removed, .. } => removed.as_deref(),
            Self::Update { previous, .. } => previous.as_deref(),
            Self::List | Self::Undo => None,
        }
    }

    /// Performs the operation against `session`.
    ///
    /// Does not touch the undo history except for `Undo`, which pops it.
    /// Recording successful commands is the caller's job.
    pub fn execute(&mut self, session: &mut EditSession) -> CommandResult<CommandOutcome> {
        let outcome = match self {
            Self::Add { request, appended } => {
                *appended = Some(execute_add(&mut session.store, request)?);
                CommandOutcome::Applied
            }
            Self::Delete { index, removed } => {
                *removed = Some(session.store.remove_at(*index)?);
                CommandOutcome::Applied
            }
            Self::Update {
                index,
                request,
                previous,
            } => {
                *previous = Some(execute_update(&mut session.store, *index, request)?);
                CommandOutcome::Applied
            }
            Self::List => {
                if session.store.is_empty() {
                    return Err(CommandError::NotFound(
                        "there are no lines to display".to_string(),
                    ));
                }
                CommandOutcome::Listed(session.store.lines().to_vec())
            }
            Self::Undo => {
                undo_latest(session)?;
                CommandOutcome::Applied
            }
        };

        debug!(
            "event=command_execute module=command status=ok kind={} lines={}",
            self.label(),
            session.store.len()
        );
        Ok(outcome)
    }

    /// Reverses a previously executed command.
    pub fn undo(&mut self, session: &mut EditSession) -> CommandResult<()> {
        match self {
            Self::Add { appended, .. } => {
                if appended.is_none() {
                    return Err(CommandError::NotExecuted("add"));
                }
                session.store.remove_last()?;
                *appended = None;
            }
            Self::Delete { index, removed } => {
                let line = removed.clone().ok_or(CommandError::NotExecuted("delete"))?;
                session.store.insert_at(*index, line)?;
                *removed = None;
            }
            Self::Update {
                index, previous, ..
            } => {
                let line = previous.clone().ok_or(CommandError::NotExecuted("update"))?;
                session.store.set_at(*index, line)?;
                *previous = None;
            }
            Self::List => return Err(CommandError::NotInvertible),
            Self::Undo => undo_latest(session)?,
        }

        debug!(
            "event=command_undo module=command status=ok kind={} lines={}",
            self.label(),
            session.store.len()
        );
        Ok(())
    }
}

/// Pops the most recent history entry and inverts it.
///
/// The popped command is dropped even when its undo fails.
pub(crate) fn undo_latest(session: &mut EditSession) -> CommandResult<()> {
    let mut latest = session
        .history
        .pop()
        .ok_or(CommandError::EmptyHistory)?;
    latest.undo(session)
}

fn zero_based(position: usize) -> CommandResult<usize> {
    position
        .checked_sub(1)
        .ok_or(CommandError::OutOfRange { position, len: 0 })
}

fn execute_add(store: &mut LineStore, request: &AddRequest) -> CommandResult<String> {
    if !are_valid_names(&[request.first_name.as_str(), request.last_name.as_str()]) {
        return Err(CommandError::invalid_input("name fields cannot be empty"));
    }

    let contact = request.contact.trim();
    if !validate_email(contact).is_acceptable() {
        return Err(CommandError::invalid_input(format!(
            "invalid contact `{contact}`"
        )));
    }

    let line = format_new_line(&request.first_name, &request.last_name, contact);
    store.append_line(line.clone())?;
    Ok(line)
}

// Returns the line that was replaced.
fn execute_update(
    store: &mut LineStore,
    index: usize,
    request: &UpdateRequest,
) -> CommandResult<String> {
    let current = store
        .get(index)
        .ok_or(CommandError::OutOfRange {
            position: index + 1,
            len: store.len(),
        })?
        .to_string();

    let first_name = title_case(request.first_name.trim());
    let last_name = request
        .last_name
        .as_deref()
        .map(|value| title_case(value.trim()));

    let mut names = vec![first_name.as_str()];
    if let Some(last_name) = last_name.as_deref() {
        names.push(last_name);
    }
    if !are_valid_names(&names) {
        return Err(CommandError::invalid_input(
            "name fields cannot be empty or invalid",
        ));
    }

    let contact = request
        .contact
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty());
    if let Some(contact) = contact {
        if !validate_email(contact).is_acceptable() {
            return Err(CommandError::invalid_input(format!(
                "invalid contact `{contact}`"
            )));
        }
    }

    let mut fields: Vec<String> = current
        .split(LINE_FIELD_SEPARATOR)
        .map(str::to_string)
        .collect();
    set_field(&mut fields, FIRST_NAME_FIELD, first_name);
    if let Some(last_name) = last_name {
        set_field(&mut fields, LAST_NAME_FIELD, last_name);
    }
    if let Some(contact) = contact {
        set_field(&mut fields, CONTACT_FIELD, normalize_contact(contact));
    }

    let updated = fields.join(LINE_FIELD_SEPARATOR);
    Ok(store.set_at(index, updated)?)
}

// Short (hand-edited) lines grow to reach `position`.
fn set_field(fields: &mut Vec<String>, position: usize, value: String) {
    if fields.len() <= position {
        fields.resize(position + 1, String::new());
    }
    fields[position] = value;
}
