// Receipt session: one baseline plus its edit and split logs.
//
// Responsibilities
// - Own the baseline and both logs together, so that replacing the baseline clears the logs in the
//   same step. Neither log can be cleared on its own.
// - Derive current items, splits and totals by full replay on every read.
// - Track a version that grows on every append and every restart, used for compare-and-append.

use crate::modules::receipts::core::aggregate::{SplitSummary, aggregate};
use crate::modules::receipts::core::evolve::{reduce_items, reduce_splits};
use crate::modules::receipts::core::item::ReceiptItem;
use crate::modules::receipts::core::operation_log::OperationLog;
use crate::modules::receipts::core::operations::{EditOperation, SessionEntry, SplitOperation};
use crate::modules::receipts::core::receipt::Receipt;
use crate::modules::receipts::core::split::ItemSplit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptSession {
    baseline: Receipt,
    edit_log: OperationLog<EditOperation>,
    split_log: OperationLog<SplitOperation>,
    version: i64,
}

impl ReceiptSession {
    pub fn new(baseline: Receipt) -> Self {
        Self {
            baseline,
            edit_log: OperationLog::new(),
            split_log: OperationLog::new(),
            version: 0,
        }
    }

    pub fn receipt_id(&self) -> &str {
        &self.baseline.id
    }

    pub fn baseline(&self) -> &Receipt {
        &self.baseline
    }

    pub fn edit_log(&self) -> &OperationLog<EditOperation> {
        &self.edit_log
    }

    pub fn split_log(&self) -> &OperationLog<SplitOperation> {
        &self.split_log
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn current_items(&self) -> Vec<ReceiptItem> {
        reduce_items(&self.baseline, self.edit_log.to_sequence())
    }

    pub fn current_splits(&self) -> Vec<ItemSplit> {
        reduce_splits(self.split_log.to_sequence())
    }

    pub fn summary(&self) -> SplitSummary {
        aggregate(&self.current_items(), &self.current_splits())
    }

    pub fn record(&mut self, entry: SessionEntry) {
        match entry {
            SessionEntry::Edit(logged) => self.edit_log.append(logged),
            SessionEntry::Split(logged) => self.split_log.append(logged),
        }
        self.version += 1;
    }

    /// Swaps in a new baseline and drops both logs.
    pub fn restart(&mut self, baseline: Receipt) {
        self.baseline = baseline;
        self.edit_log.clear();
        self.split_log.clear();
        self.version += 1;
    }

    /// Describes why `entry` will not change the current state, if it refers to something that
    /// is not there. The entry is still valid to append.
    pub fn missing_reference(&self, entry: &SessionEntry) -> Option<String> {
        match entry {
            SessionEntry::Edit(logged) => {
                let items = self.current_items();
                let exists = |id: &str| items.iter().any(|item| item.id == id);
                match &logged.operation {
                    EditOperation::AddItem { item } if exists(item.id.as_str()) => {
                        Some(format!("item id {} already exists; added a second entry", item.id))
                    }
                    EditOperation::AddItem { .. } => None,
                    EditOperation::RemoveItem { id } | EditOperation::UpdateItem { id, .. }
                        if !exists(id.as_str()) =>
                    {
                        Some(format!("item {id} not found; nothing changed"))
                    }
                    _ => None,
                }
            }
            SessionEntry::Split(logged) => match &logged.operation {
                SplitOperation::AddSplit { split } => {
                    let on_line_item = self
                        .current_items()
                        .iter()
                        .any(|item| item.id == split.item_id && item.is_line_item());
                    (!on_line_item).then(|| {
                        format!(
                            "item {} is not a line item on this receipt; the split will not count",
                            split.item_id
                        )
                    })
                }
                SplitOperation::RemoveSplit { id } | SplitOperation::UpdateSplit { id, .. } => {
                    let exists = self.current_splits().iter().any(|split| &split.id == id);
                    (!exists).then(|| format!("split {id} not found; nothing changed"))
                }
            },
        }
    }
}
