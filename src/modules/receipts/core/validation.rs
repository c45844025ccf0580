// Field-level rules checked before anything is appended to a log.
//
// The reducers never call into this module: a logged operation is applied as recorded.
//
// Bounds
// - Amounts are capped at `MAX_CENTS` and quantities at `MAX_QUANTITY`, so an item price always
//   fits in an `i64` with room for millions of items on one receipt.

use crate::modules::receipts::core::item::{ReceiptItem, ReceiptItemPatch};
use crate::modules::receipts::core::split::SplitShare;
use crate::shared::core::primitives::Cents;

/// One billion in major currency units.
pub const MAX_CENTS: Cents = 100_000_000_000;
pub const MAX_QUANTITY: u32 = 10_000;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing or malformed arguments: {0}")]
    MalformedArguments(String),

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Cents },

    #[error("{field} must not exceed {max}, got {value}")]
    TooLarge {
        field: &'static str,
        value: i64,
        max: i64,
    },

    #[error("{field} must be a positive integer")]
    NotPositive { field: &'static str },

    #[error("shares ({shares}) must not exceed totalShares ({total_shares})")]
    SharesExceedTotal { shares: u32, total_shares: u32 },

    #[error("update must change at least one field")]
    EmptyUpdate,
}

pub fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

pub fn validate_cents(field: &'static str, value: Cents) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }
    if value > MAX_CENTS {
        return Err(ValidationError::TooLarge {
            field,
            value,
            max: MAX_CENTS,
        });
    }
    Ok(())
}

pub fn validate_positive(field: &'static str, value: u32) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(())
}

pub fn validate_quantity(value: u32) -> Result<(), ValidationError> {
    validate_positive("quantity", value)?;
    if value > MAX_QUANTITY {
        return Err(ValidationError::TooLarge {
            field: "quantity",
            value: value as i64,
            max: MAX_QUANTITY as i64,
        });
    }
    Ok(())
}

pub fn validate_item(item: &ReceiptItem) -> Result<(), ValidationError> {
    validate_name("id", &item.id)?;
    validate_name("name", &item.name)?;
    validate_cents("unitPrice", item.unit_price)?;
    validate_quantity(item.quantity)
}

pub fn validate_item_patch(patch: &ReceiptItemPatch) -> Result<(), ValidationError> {
    if patch.is_empty() {
        return Err(ValidationError::EmptyUpdate);
    }
    if let Some(name) = &patch.name {
        validate_name("name", name)?;
    }
    if let Some(unit_price) = patch.unit_price {
        validate_cents("unitPrice", unit_price)?;
    }
    if let Some(quantity) = patch.quantity {
        validate_quantity(quantity)?;
    }
    Ok(())
}

pub fn validate_share(share: &SplitShare) -> Result<(), ValidationError> {
    match *share {
        SplitShare::Absolute { amount } => validate_cents("amount", amount),
        SplitShare::Proportional {
            shares,
            total_shares,
        } => {
            validate_positive("shares", shares)?;
            validate_positive("totalShares", total_shares)?;
            if shares > total_shares {
                return Err(ValidationError::SharesExceedTotal {
                    shares,
                    total_shares,
                });
            }
            Ok(())
        }
    }
}
