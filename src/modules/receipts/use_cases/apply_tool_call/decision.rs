use crate::modules::receipts::core::operations::SessionEntry;
use crate::modules::receipts::core::ports::SessionStoreError;
use crate::modules::receipts::core::validation::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    ValidationError,
    UnknownOperation,
    ReferenceNotFound,
    UpstreamFailure,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ToolCallError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("receipt not found: {0}")]
    ReceiptNotFound(String),

    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl ToolCallError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolCallError::Validation(_) => ErrorKind::ValidationError,
            ToolCallError::UnknownOperation(_) => ErrorKind::UnknownOperation,
            ToolCallError::ReceiptNotFound(_) => ErrorKind::ReferenceNotFound,
            ToolCallError::Upstream(_) => ErrorKind::UpstreamFailure,
        }
    }
}

impl From<SessionStoreError> for ToolCallError {
    fn from(error: SessionStoreError) -> Self {
        match error {
            SessionStoreError::NotFound(receipt_id) => ToolCallError::ReceiptNotFound(receipt_id),
            other => ToolCallError::Upstream(other.to_string()),
        }
    }
}

pub enum Decision {
    Accepted {
        entries: Vec<SessionEntry>,
        /// Id of the item or split created by the call, if any.
        assigned_id: Option<String>,
    },
    Query,
    Rejected {
        reason: ToolCallError,
    },
}
