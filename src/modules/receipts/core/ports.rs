// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe where receipt sessions live as a trait, so handlers never touch a concrete store.
//
// Responsibilities
// - `load` returns a snapshot of one session. Reads never observe a half-applied append.
// - `append` is compare-and-append: it only succeeds when the caller saw the current version.
// - `start` creates a session or, for a known receipt id, swaps its baseline and clears both logs
//   in one step. `reset` does the same with the existing baseline.
// - `discard` forgets a session entirely: its baseline and both logs.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.

use crate::modules::receipts::core::operations::SessionEntry;
use crate::modules::receipts::core::receipt::Receipt;
use crate::modules::receipts::core::session::ReceiptSession;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("receipt not found: {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, receipt_id: &str) -> Result<ReceiptSession, SessionStoreError>;
    async fn start(&self, baseline: Receipt) -> Result<(), SessionStoreError>;
    async fn reset(&self, receipt_id: &str) -> Result<(), SessionStoreError>;
    async fn discard(&self, receipt_id: &str) -> Result<(), SessionStoreError>;
    /// Returns the session version after the append.
    async fn append(
        &self,
        receipt_id: &str,
        expected_version: i64,
        entries: &[SessionEntry],
    ) -> Result<i64, SessionStoreError>;
    async fn list(&self) -> Result<Vec<Receipt>, SessionStoreError>;
}
