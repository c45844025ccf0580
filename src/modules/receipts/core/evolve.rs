// Reducers: fold a baseline and the operation logs into the current items and splits.
//
// Boundaries
// - No input or output. No side effects. Same inputs always produce the same output.
// - Operations referring to an id that is not present leave the state unchanged; later
//   operations are still applied.
//
// Testing guidance
// - Replaying an empty log yields the baseline items.
// - Appending the same operation twice applies it twice; calling the reducer twice does not.

use crate::modules::receipts::core::item::ReceiptItem;
use crate::modules::receipts::core::operations::{EditOperation, Logged, SplitOperation};
use crate::modules::receipts::core::receipt::Receipt;
use crate::modules::receipts::core::split::ItemSplit;

pub fn evolve_items(mut items: Vec<ReceiptItem>, operation: &EditOperation) -> Vec<ReceiptItem> {
    match operation {
        EditOperation::AddItem { item } => items.push(item.clone()),
        EditOperation::RemoveItem { id } => items.retain(|item| &item.id != id),
        EditOperation::UpdateItem { id, patch } => items
            .iter_mut()
            .filter(|item| &item.id == id)
            .for_each(|item| patch.merge_into(item)),
    }
    items
}

pub fn evolve_splits(mut splits: Vec<ItemSplit>, operation: &SplitOperation) -> Vec<ItemSplit> {
    match operation {
        SplitOperation::AddSplit { split } => splits.push(split.clone()),
        SplitOperation::RemoveSplit { id } => splits.retain(|split| &split.id != id),
        SplitOperation::UpdateSplit { id, patch } => splits
            .iter_mut()
            .filter(|split| &split.id == id)
            .for_each(|split| patch.merge_into(split)),
    }
    splits
}

pub fn reduce_items(baseline: &Receipt, edit_log: &[Logged<EditOperation>]) -> Vec<ReceiptItem> {
    edit_log
        .iter()
        .map(|logged| &logged.operation)
        .fold(baseline.items.clone(), evolve_items)
}

pub fn reduce_splits(split_log: &[Logged<SplitOperation>]) -> Vec<ItemSplit> {
    split_log
        .iter()
        .map(|logged| &logged.operation)
        .fold(Vec::new(), evolve_splits)
}
