// Split aggregation: per-person totals derived from the current items and splits.
//
// Rules
// - Items named TAX and TIP are pseudo-items; every other item is a line item.
// - Splits referring to an item that is not a current line item are skipped entirely.
// - Tax and tip are distributed in proportion to each person's share of the subtotal.
// - Every division rounds half up (see `mul_div_round`). Whatever rounding leaves over,
//   plus everything nobody was assigned, shows up in `unsplit_amount`.
//
// Law
// - sum(person totals) + unsplit_amount == subtotal + tax + tip, exactly, for every receipt whose
//   amounts passed validation. Sums saturate instead of overflowing, so a log that somehow holds
//   larger values still aggregates without panicking.

use crate::modules::receipts::core::item::ReceiptItem;
use crate::modules::receipts::core::split::ItemSplit;
use crate::shared::core::primitives::{Cents, mul_div_round};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonTotals {
    pub subtotal: Cents,
    pub tax: Cents,
    pub tip: Cents,
    pub total: Cents,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitSummary {
    pub person_totals: BTreeMap<String, PersonTotals>,
    pub unsplit_amount: Cents,
    pub subtotal: Cents,
    pub tax: Cents,
    pub tip: Cents,
    pub grand_total: Cents,
}

pub fn aggregate(items: &[ReceiptItem], splits: &[ItemSplit]) -> SplitSummary {
    let mut line_items: HashMap<&str, &ReceiptItem> = HashMap::new();
    let (mut subtotal, mut tax, mut tip): (Cents, Cents, Cents) = (0, 0, 0);

    for item in items {
        if item.is_tax() {
            tax = tax.saturating_add(item.price());
        } else if item.is_tip() {
            tip = tip.saturating_add(item.price());
        } else {
            subtotal = subtotal.saturating_add(item.price());
            line_items.entry(item.id.as_str()).or_insert(item);
        }
    }
    let grand_total = subtotal.saturating_add(tax).saturating_add(tip);

    let mut person_totals: BTreeMap<String, PersonTotals> = BTreeMap::new();
    for split in splits {
        let Some(item) = line_items.get(split.item_id.as_str()) else {
            continue;
        };
        let totals = person_totals.entry(split.person.clone()).or_default();
        totals.subtotal = totals
            .subtotal
            .saturating_add(split.share.amount_of(item.price()));
    }

    for totals in person_totals.values_mut() {
        if subtotal != 0 {
            totals.tax = mul_div_round(tax, totals.subtotal, subtotal);
            totals.tip = mul_div_round(tip, totals.subtotal, subtotal);
        }
        totals.total = totals
            .subtotal
            .saturating_add(totals.tax)
            .saturating_add(totals.tip);
    }

    let assigned = person_totals
        .values()
        .fold(0, |sum: Cents, totals| sum.saturating_add(totals.total));
    SplitSummary {
        person_totals,
        unsplit_amount: grand_total.saturating_sub(assigned),
        subtotal,
        tax,
        tip,
        grand_total,
    }
}
