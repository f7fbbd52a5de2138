//! Editing session: one line store plus its undo history.
//!
//! # Responsibility
//! - Own the store and the history that commands act on.
//! - Offer single-command entry points that record successes.
//! - Host the batch invoker.
//!
//! # Invariants
//! - History belongs to exactly one session; it is never shared or persisted.
//! - Only successfully executed reversible commands enter the history.

use crate::command::edit_command::{undo_latest, Command, CommandOutcome};
use crate::command::CommandResult;
use crate::model::record::{AddRequest, UpdateRequest};
use crate::store::line_store::LineStore;
use crate::store::StoreResult;
use std::path::Path;

pub mod history;
pub mod invoker;

use history::UndoHistory;

/// Store and undo history for one logical editing session.
#[derive(Debug)]
pub struct EditSession {
    pub(crate) store: LineStore,
    pub(crate) history: UndoHistory,
}

impl EditSession {
    /// Starts a session with an empty history.
    pub fn new(store: LineStore) -> Self {
        Self {
            store,
            history: UndoHistory::new(),
        }
    }

    /// Opens the store at `path` and starts a session on it.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self::new(LineStore::open(path)?))
    }

    pub fn store(&self) -> &LineStore {
        &self.store
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Ends the session, keeping the store.
    pub fn into_store(self) -> LineStore {
        self.store
    }

    /// Executes one command and records it when reversible.
    pub fn apply(&mut self, mut command: Command) -> CommandResult<CommandOutcome> {
        let outcome = command.execute(self)?;
        if command.is_reversible() {
            self.history.push(command);
        }
        Ok(outcome)
    }

    pub fn add(&mut self, request: AddRequest) -> CommandResult<()> {
        self.apply(Command::add(request)).map(|_| ())
    }

    /// Deletes the line at 1-based `position`.
    pub fn delete(&mut self, position: usize) -> CommandResult<()> {
        self.apply(Command::delete(position)?).map(|_| ())
    }

    pub fn update(&mut self, request: UpdateRequest) -> CommandResult<()> {
        self.apply(Command::update(request)?).map(|_| ())
    }

    /// Returns every stored line; fails on an empty store.
    pub fn list(&mut self) -> CommandResult<Vec<String>> {
        match Command::list().execute(self)? {
            CommandOutcome::Listed(lines) => Ok(lines),
            CommandOutcome::Applied => Ok(Vec::new()),
        }
    }

    /// Inverts the most recent history entry.
    ///
    /// Not recorded itself. Inner undo failures propagate unchanged.
    pub fn undo(&mut self) -> CommandResult<()> {
        undo_latest(self)
    }
}
