// Baseline receipt: the snapshot captured once when a receipt is scanned or loaded.
//
// Boundaries
// - Never mutated after creation. Edits live in the operation logs of the owning session,
//   so replaying zero operations always yields this snapshot again.

use crate::modules::receipts::core::item::ReceiptItem;
use crate::shared::core::primitives::EpochMillis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: String,
    pub items: Vec<ReceiptItem>,
    pub created_at: EpochMillis,
}

impl Receipt {
    pub fn new(id: impl Into<String>, items: Vec<ReceiptItem>, created_at: EpochMillis) -> Self {
        Self {
            id: id.into(),
            items,
            created_at,
        }
    }
}
