// Operations recorded in the receipt session logs.
//
// Purpose
// - Provide one closed type per log kind to pattern match in the reducers.
//
// Versioning and evolution
// - Operations are facts about what the editor asked for. Once logged they are never changed;
//   a correction is a new operation appended after the old one.
//
// Structure
// - `Logged<Op>` is the envelope carrying operation id and creation time for ordering and audit.
// - `EditOperation` targets items, `SplitOperation` targets splits.

use crate::modules::receipts::core::item::{ReceiptItem, ReceiptItemPatch};
use crate::modules::receipts::core::split::{ItemSplit, ItemSplitPatch};
use crate::shared::core::primitives::EpochMillis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logged<Op> {
    pub operation_id: String,
    pub created_at: EpochMillis,
    pub operation: Op,
}

impl<Op> Logged<Op> {
    pub fn new(operation_id: impl Into<String>, created_at: EpochMillis, operation: Op) -> Self {
        Self {
            operation_id: operation_id.into(),
            created_at,
            operation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum EditOperation {
    AddItem { item: ReceiptItem },
    RemoveItem { id: String },
    UpdateItem { id: String, patch: ReceiptItemPatch },
}

impl EditOperation {
    /// Id of the item this operation refers to.
    pub fn target_id(&self) -> &str {
        match self {
            EditOperation::AddItem { item } => &item.id,
            EditOperation::RemoveItem { id } | EditOperation::UpdateItem { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum SplitOperation {
    AddSplit { split: ItemSplit },
    RemoveSplit { id: String },
    UpdateSplit { id: String, patch: ItemSplitPatch },
}

impl SplitOperation {
    pub fn target_id(&self) -> &str {
        match self {
            SplitOperation::AddSplit { split } => &split.id,
            SplitOperation::RemoveSplit { id } | SplitOperation::UpdateSplit { id, .. } => id,
        }
    }
}

/// Entry appended to a session: routed to the edit or split log by its variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "log", content = "entry", rename_all = "lowercase")]
pub enum SessionEntry {
    Edit(Logged<EditOperation>),
    Split(Logged<SplitOperation>),
}

impl SessionEntry {
    pub fn operation_id(&self) -> &str {
        match self {
            SessionEntry::Edit(logged) => &logged.operation_id,
            SessionEntry::Split(logged) => &logged.operation_id,
        }
    }
    /// Id of the item or split the entry refers to.
    pub fn target_id(&self) -> &str {
        match self {
            SessionEntry::Edit(logged) => logged.operation.target_id(),
            SessionEntry::Split(logged) => logged.operation.target_id(),
        }
    }
}
