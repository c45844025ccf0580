// Turns a scanned receipt into the immutable baseline of a new session.
//
// Responsibilities
// - Give every line item an id, keeping ids the scanner already supplied.
// - Append the TAX and TIP pseudo-items, zero when the receipt shows none.
// - Reject the whole receipt if any item or amount is invalid.

use crate::modules::receipts::core::item::{ReceiptItem, TAX_ITEM_NAME, TIP_ITEM_NAME};
use crate::modules::receipts::core::receipt::Receipt;
use crate::modules::receipts::core::validation::{ValidationError, validate_cents, validate_item, validate_name};
use crate::modules::receipts::use_cases::start_receipt::command::StartReceipt;

pub fn decide_start(
    command: StartReceipt,
    mut fresh_id: impl FnMut() -> String,
) -> Result<Receipt, ValidationError> {
    validate_name("receiptId", &command.receipt_id)?;
    validate_cents("tax", command.scanned.tax)?;
    validate_cents("tip", command.scanned.tip)?;

    let mut items = Vec::with_capacity(command.scanned.items.len() + 2);
    for scanned in command.scanned.items {
        let item = ReceiptItem {
            id: scanned.id.unwrap_or_else(&mut fresh_id),
            name: scanned.name,
            unit_price: scanned.unit_price,
            quantity: scanned.quantity,
            taxed: scanned.taxed,
        };
        validate_item(&item)?;
        items.push(item);
    }
    items.push(ReceiptItem::new(fresh_id(), TAX_ITEM_NAME, command.scanned.tax));
    items.push(ReceiptItem::new(fresh_id(), TIP_ITEM_NAME, command.scanned.tip));

    Ok(Receipt::new(command.receipt_id, items, command.created_at))
}
