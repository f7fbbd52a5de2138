//! LIFO undo history for one editing session.

use crate::command::edit_command::Command;

/// Executed, not-yet-undone commands, most recent last.
#[derive(Debug, Default)]
pub struct UndoHistory {
    entries: Vec<Command>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.entries.push(command);
    }

    pub fn pop(&mut self) -> Option<Command> {
        self.entries.pop()
    }

    /// Returns the command the next undo would invert.
    pub fn peek(&self) -> Option<&Command> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Labels from oldest to newest.
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(Command::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::UndoHistory;
    use crate::command::edit_command::Command;

    #[test]
    fn pop_returns_most_recent_first() {
        let mut history = UndoHistory::new();
        history.push(Command::list());
        history.push(Command::undo_last());

        assert_eq!(history.labels(), ["list", "undo"]);
        assert_eq!(history.peek().map(Command::label), Some("undo"));
        assert_eq!(history.pop().map(|command| command.label()), Some("undo"));
        assert_eq!(history.len(), 1);

        history.clear();
        assert!(history.is_empty());
        assert!(history.pop().is_none());
    }
}
