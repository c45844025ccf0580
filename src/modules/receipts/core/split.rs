// Assignment of part of one item's cost to a named person.
//
// Notes
// - `item_id` is a weak reference. The item may be removed later; the aggregator skips such splits.
// - `person` is a plain label compared by string equality.
// - The kind and its amount fields form one tagged variant, so a split always carries exactly
//   the fields of its kind: `{"kind":"absolute","amount":..}` or
//   `{"kind":"proportional","shares":..,"totalShares":..}`.

use crate::shared::core::primitives::{Cents, mul_div_round};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum SplitShare {
    Absolute { amount: Cents },
    Proportional { shares: u32, total_shares: u32 },
}

impl SplitShare {
    pub fn kind(&self) -> &'static str {
        match self {
            SplitShare::Absolute { .. } => "absolute",
            SplitShare::Proportional { .. } => "proportional",
        }
    }

    /// Cents of an item with the given price attributed by this share.
    pub fn amount_of(&self, item_price: Cents) -> Cents {
        match *self {
            SplitShare::Absolute { amount } => amount,
            SplitShare::Proportional {
                shares,
                total_shares,
            } => mul_div_round(item_price, shares as i64, total_shares as i64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSplit {
    pub id: String,
    pub item_id: String,
    pub person: String,
    #[serde(flatten)]
    pub share: SplitShare,
}

impl ItemSplit {
    pub fn absolute(
        id: impl Into<String>,
        item_id: impl Into<String>,
        person: impl Into<String>,
        amount: Cents,
    ) -> Self {
        Self {
            id: id.into(),
            item_id: item_id.into(),
            person: person.into(),
            share: SplitShare::Absolute { amount },
        }
    }

    pub fn proportional(
        id: impl Into<String>,
        item_id: impl Into<String>,
        person: impl Into<String>,
        shares: u32,
        total_shares: u32,
    ) -> Self {
        Self {
            id: id.into(),
            item_id: item_id.into(),
            person: person.into(),
            share: SplitShare::Proportional {
                shares,
                total_shares,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSplitPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<SplitShare>,
}

impl ItemSplitPatch {
    pub fn merge_into(&self, split: &mut ItemSplit) {
        if let Some(item_id) = &self.item_id {
            split.item_id = item_id.clone();
        }
        if let Some(person) = &self.person {
            split.person = person.clone();
        }
        if let Some(share) = self.share {
            split.share = share;
        }
    }
}
