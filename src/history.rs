//! Undo/redo history over document commands.
//!
//! Commands mutate the store through [`Command::execute`] and capture
//! whatever they need to reverse themselves. The history owns executed
//! commands on two stacks; a fresh command invalidates the redo stack.

use tracing::debug;

use crate::constants::MAX_HISTORY;
use crate::store::NodeStore;

/// A reversible document mutation.
///
/// `execute` must capture the reversal state it needs each time it runs,
/// so the default `redo` (re-execute) stays correct after an undo.
pub trait Command {
    /// Stable name for logging.
    fn name(&self) -> &'static str;

    fn execute(&mut self, store: &mut NodeStore);

    fn undo(&mut self, store: &mut NodeStore);

    fn redo(&mut self, store: &mut NodeStore) {
        self.execute(store);
    }
}

/// Bounded undo/redo stacks.
pub struct History {
    undo_stack: Vec<Box<dyn Command>>,
    redo_stack: Vec<Box<dyn Command>>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_limit(MAX_HISTORY)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Execute a command and record it. Drops the redo stack and, past the
    /// limit, the oldest undo entry.
    pub fn push(&mut self, mut command: Box<dyn Command>, store: &mut NodeStore) {
        debug!(command = command.name(), "execute");
        command.execute(store);
        self.redo_stack.clear();
        self.undo_stack.push(command);
        if self.undo_stack.len() > self.limit {
            self.undo_stack.remove(0);
        }
    }

    /// Reverse the most recent command. Returns false on an empty stack.
    pub fn undo(&mut self, store: &mut NodeStore) -> bool {
        let Some(mut command) = self.undo_stack.pop() else {
            return false;
        };
        debug!(command = command.name(), "undo");
        command.undo(store);
        self.redo_stack.push(command);
        true
    }

    /// Re-apply the most recently undone command. Returns false on an empty
    /// stack.
    pub fn redo(&mut self, store: &mut NodeStore) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        debug!(command = command.name(), "redo");
        command.redo(store);
        self.undo_stack.push(command);
        true
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
