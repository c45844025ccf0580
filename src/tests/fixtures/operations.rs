// Builders for logged operations with a fixed creation time.

use crate::modules::receipts::core::item::{ReceiptItem, ReceiptItemPatch};
use crate::modules::receipts::core::operations::{EditOperation, Logged, SplitOperation};
use crate::modules::receipts::core::split::{ItemSplit, ItemSplitPatch};
use crate::shared::core::primitives::EpochMillis;

pub const FIXED_AT: EpochMillis = 1_700_000_000_000;

pub fn add_item(operation_id: &str, item: ReceiptItem) -> Logged<EditOperation> {
    Logged::new(operation_id, FIXED_AT, EditOperation::AddItem { item })
}

pub fn remove_item(operation_id: &str, id: &str) -> Logged<EditOperation> {
    Logged::new(operation_id, FIXED_AT, EditOperation::RemoveItem { id: id.into() })
}

pub fn update_item(operation_id: &str, id: &str, patch: ReceiptItemPatch) -> Logged<EditOperation> {
    Logged::new(
        operation_id,
        FIXED_AT,
        EditOperation::UpdateItem {
            id: id.into(),
            patch,
        },
    )
}

pub fn add_split(operation_id: &str, split: ItemSplit) -> Logged<SplitOperation> {
    Logged::new(operation_id, FIXED_AT, SplitOperation::AddSplit { split })
}

pub fn remove_split(operation_id: &str, id: &str) -> Logged<SplitOperation> {
    Logged::new(operation_id, FIXED_AT, SplitOperation::RemoveSplit { id: id.into() })
}

pub fn update_split(operation_id: &str, id: &str, patch: ItemSplitPatch) -> Logged<SplitOperation> {
    Logged::new(
        operation_id,
        FIXED_AT,
        SplitOperation::UpdateSplit {
            id: id.into(),
            patch,
        },
    )
}
