// Read model for rendering and for the agent's get_current_receipt query.
//
// Purpose
// - Snapshot everything a consumer may look at: current items, current splits, totals, and how
//   many operations each log holds.
//
// Boundaries
// - Built from a session by value. Holding a view gives no way to append to a log.

use crate::modules::receipts::core::aggregate::{SplitSummary, aggregate};
use crate::modules::receipts::core::item::ReceiptItem;
use crate::modules::receipts::core::session::ReceiptSession;
use crate::modules::receipts::core::split::{ItemSplit, SplitShare};
use crate::shared::core::primitives::EpochMillis;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptView {
    pub receipt_id: String,
    pub created_at: EpochMillis,
    pub items: Vec<ReceiptItem>,
    pub splits: Vec<ItemSplit>,
    pub totals: SplitSummary,
    pub edit_count: usize,
    pub split_count: usize,
    pub version: i64,
}

impl ReceiptView {
    pub fn from_session(session: &ReceiptSession) -> Self {
        let items = session.current_items();
        let splits = session.current_splits();
        let totals = aggregate(&items, &splits);
        Self {
            receipt_id: session.receipt_id().to_string(),
            created_at: session.baseline().created_at,
            items,
            splits,
            totals,
            edit_count: session.edit_log().len(),
            split_count: session.split_log().len(),
            version: session.version(),
        }
    }

    /// Plain text listing for the voice agent. Amounts stay in cents.
    pub fn summary_text(&self) -> String {
        let mut text = String::from("CURRENT RECEIPT (amounts in cents):\n");
        for item in &self.items {
            let _ = writeln!(
                text,
                "- {} x{}: {} cents (ID: {})",
                item.name, item.quantity, item.unit_price, item.id
            );
        }
        if self.splits.is_empty() {
            text.push_str("SPLITS: none\n");
        } else {
            text.push_str("SPLITS:\n");
            for split in &self.splits {
                let share = match split.share {
                    SplitShare::Absolute { amount } => format!("{amount} cents"),
                    SplitShare::Proportional {
                        shares,
                        total_shares,
                    } => format!("{shares}/{total_shares}"),
                };
                let _ = writeln!(
                    text,
                    "- {} pays {} of item {} (ID: {})",
                    split.person, share, split.item_id, split.id
                );
            }
        }
        for (person, totals) in &self.totals.person_totals {
            let _ = writeln!(
                text,
                "TOTAL {}: {} cents (subtotal {}, tax {}, tip {})",
                person, totals.total, totals.subtotal, totals.tax, totals.tip
            );
        }
        let _ = write!(
            text,
            "UNSPLIT: {} cents of {} cents",
            self.totals.unsplit_amount, self.totals.grand_total
        );
        text
    }
}
