// A single receipt line and the partial-update shape used by UpdateItem.
//
// Notes
// - `unit_price` is in cents. The price the aggregator works with is `unit_price * quantity`.
// - Items named exactly `TAX` or `TIP` are pseudo-items carrying those amounts, not line items.
// - `id` is absent from the patch type, so an update can never rename an item's identity.

use crate::shared::core::primitives::Cents;
use serde::{Deserialize, Serialize};

pub const TAX_ITEM_NAME: &str = "TAX";
pub const TIP_ITEM_NAME: &str = "TIP";

pub(crate) fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub id: String,
    pub name: String,
    #[serde(alias = "price")]
    pub unit_price: Cents,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub taxed: bool,
}

impl ReceiptItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Cents) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity: 1,
            taxed: false,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_taxed(mut self, taxed: bool) -> Self {
        self.taxed = taxed;
        self
    }

    pub fn price(&self) -> Cents {
        self.unit_price.saturating_mul(self.quantity as i64)
    }

    pub fn is_tax(&self) -> bool {
        self.name == TAX_ITEM_NAME
    }

    pub fn is_tip(&self) -> bool {
        self.name == TIP_ITEM_NAME
    }

    pub fn is_line_item(&self) -> bool {
        !self.is_tax() && !self.is_tip()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "price", skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Cents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxed: Option<bool>,
}

impl ReceiptItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.unit_price.is_none()
            && self.quantity.is_none()
            && self.taxed.is_none()
    }

    pub fn merge_into(&self, item: &mut ReceiptItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(unit_price) = self.unit_price {
            item.unit_price = unit_price;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(taxed) = self.taxed {
            item.taxed = taxed;
        }
    }
}
