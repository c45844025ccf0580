use crate::modules::receipts::core::item::default_quantity;
use crate::shared::core::primitives::{Cents, EpochMillis};
use serde::{Deserialize, Serialize};

/// One line item as read from the photographed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(alias = "price")]
    pub unit_price: Cents,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub taxed: bool,
}

/// OCR output. Tax and tip arrive separately from the line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedReceipt {
    pub items: Vec<ScannedItem>,
    #[serde(default)]
    pub tax: Cents,
    #[serde(default)]
    pub tip: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartReceipt {
    pub receipt_id: String,
    pub scanned: ScannedReceipt,
    pub created_at: EpochMillis,
}
