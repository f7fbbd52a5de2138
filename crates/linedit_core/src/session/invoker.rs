//! Batch invoker for edit commands.
//!
//! # Responsibility
//! - Run a pending batch of commands in order against one session.
//! - Record every successful reversible command in the session history.
//! - Keep going after failures and report them per command.
//!
//! # Invariants
//! - A failing command never aborts the rest of the batch.
//! - The pending batch is empty after `run`, whatever the outcomes.

use super::EditSession;
use crate::command::edit_command::{Command, CommandOutcome};
use crate::command::{CommandError, ErrorKind};
use log::{info, warn};

/// One failed command inside a batch.
#[derive(Debug)]
pub struct BatchFailure {
    /// Zero-based position within the batch.
    pub position: usize,
    /// Command label (`add|delete|update|list|undo`).
    pub label: &'static str,
    pub error: CommandError,
}

impl BatchFailure {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

/// Summary of one `Invoker::run`.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of commands that executed successfully.
    pub executed: usize,
    pub failures: Vec<BatchFailure>,
    /// Lines produced by `List` commands, in batch order.
    pub listings: Vec<Vec<String>>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Holds a pending batch and runs it against a session.
#[derive(Debug, Default)]
pub struct Invoker {
    pending: Vec<Command>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pending batch.
    pub fn set_batch(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.pending = commands.into_iter().collect();
    }

    /// Appends one command to the pending batch.
    pub fn push(&mut self, command: Command) {
        self.pending.push(command);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Executes and drains the pending batch.
    ///
    /// # Side effects
    /// - Successful reversible commands move into `session`'s history.
    /// - Each failure emits a `command_failed` warning event.
    pub fn run(&mut self, session: &mut EditSession) -> RunReport {
        let mut report = RunReport::default();

        for (position, mut command) in self.pending.drain(..).enumerate() {
            match command.execute(session) {
                Ok(outcome) => {
                    report.executed += 1;
                    if let CommandOutcome::Listed(lines) = outcome {
                        report.listings.push(lines);
                    }
                    if command.is_reversible() {
                        session.history.push(command);
                    }
                }
                Err(error) => {
                    warn!(
                        "event=command_failed module=invoker status=error position={} kind={} error_code={} error={}",
                        position,
                        command.label(),
                        error.kind().as_str(),
                        error
                    );
                    report.failures.push(BatchFailure {
                        position,
                        label: command.label(),
                        error,
                    });
                }
            }
        }

        info!(
            "event=batch_run module=invoker status=ok executed={} failed={} history={}",
            report.executed,
            report.failures.len(),
            session.history.len()
        );
        report
    }
}
