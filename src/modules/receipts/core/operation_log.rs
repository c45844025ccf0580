// Append-only ordered log of one operation kind.
//
// Responsibilities
// - Keep operations in append order. Nothing is edited or removed individually.
// - `clear` is crate-private: only the session may call it, and only while swapping the baseline.

use crate::modules::receipts::core::operations::Logged;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationLog<Op> {
    entries: Vec<Logged<Op>>,
}

impl<Op> Default for OperationLog<Op> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<Op> OperationLog<Op> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: Logged<Op>) {
        self.entries.push(entry);
    }

    pub fn to_sequence(&self) -> &[Logged<Op>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
