// Pure decision function for tool calls.
//
// Purpose
// - Validate a parsed tool call and turn it into the log entries to append.
//
// Responsibilities
// - Assign the stamp's fresh id to created items and splits that arrive without one.
// - Reject invalid arguments before anything is appended.
// - Never look at current state: whether a referenced id exists is the reducer's concern.
// - Never perform input or output.

use crate::modules::receipts::core::item::ReceiptItem;
use crate::modules::receipts::core::operations::{
    EditOperation, Logged, SessionEntry, SplitOperation,
};
use crate::modules::receipts::core::split::{ItemSplit, SplitShare};
use crate::modules::receipts::core::validation::{
    ValidationError, validate_item, validate_item_patch, validate_name, validate_share,
};
use crate::modules::receipts::use_cases::apply_tool_call::command::{OperationStamp, ToolCall};
use crate::modules::receipts::use_cases::apply_tool_call::decision::Decision;

fn edit(stamp: OperationStamp, operation: EditOperation) -> SessionEntry {
    SessionEntry::Edit(Logged::new(stamp.operation_id, stamp.at, operation))
}

fn split(stamp: OperationStamp, operation: SplitOperation) -> SessionEntry {
    SessionEntry::Split(Logged::new(stamp.operation_id, stamp.at, operation))
}

fn new_split(
    stamp: OperationStamp,
    id: Option<String>,
    item_id: String,
    person: String,
    share: SplitShare,
) -> Result<Decision, ValidationError> {
    validate_name("itemId", &item_id)?;
    validate_name("person", &person)?;
    validate_share(&share)?;
    let id = id.unwrap_or_else(|| stamp.fresh_id.clone());
    validate_name("id", &id)?;
    let created = ItemSplit {
        id: id.clone(),
        item_id,
        person: person.trim().to_string(),
        share,
    };
    Ok(Decision::Accepted {
        entries: vec![split(stamp, SplitOperation::AddSplit { split: created })],
        assigned_id: Some(id),
    })
}

fn decide_call(call: ToolCall, stamp: OperationStamp) -> Result<Decision, ValidationError> {
    match call {
        ToolCall::AddReceiptItem(args) => {
            let item = ReceiptItem {
                id: args.id.unwrap_or_else(|| stamp.fresh_id.clone()),
                name: args.name,
                unit_price: args.unit_price,
                quantity: args.quantity,
                taxed: args.taxed,
            };
            validate_item(&item)?;
            let assigned_id = Some(item.id.clone());
            Ok(Decision::Accepted {
                entries: vec![edit(stamp, EditOperation::AddItem { item })],
                assigned_id,
            })
        }
        ToolCall::RemoveReceiptItem(args) => {
            validate_name("id", &args.id)?;
            Ok(Decision::Accepted {
                entries: vec![edit(stamp, EditOperation::RemoveItem { id: args.id })],
                assigned_id: None,
            })
        }
        ToolCall::UpdateReceiptItem(args) => {
            validate_name("id", &args.id)?;
            validate_item_patch(&args.patch)?;
            Ok(Decision::Accepted {
                entries: vec![edit(
                    stamp,
                    EditOperation::UpdateItem {
                        id: args.id,
                        patch: args.patch,
                    },
                )],
                assigned_id: None,
            })
        }
        ToolCall::AddSplit(args) => new_split(
            stamp,
            args.id,
            args.item_id,
            args.person,
            SplitShare::Absolute {
                amount: args.amount,
            },
        ),
        ToolCall::AddProportionalSplit(args) => new_split(
            stamp,
            args.id,
            args.item_id,
            args.person,
            SplitShare::Proportional {
                shares: args.shares,
                total_shares: args.total_shares,
            },
        ),
        ToolCall::RemoveSplit(args) => {
            validate_name("id", &args.id)?;
            Ok(Decision::Accepted {
                entries: vec![split(stamp, SplitOperation::RemoveSplit { id: args.id })],
                assigned_id: None,
            })
        }
        ToolCall::GetCurrentReceipt => Ok(Decision::Query),
    }
}

pub fn decide(call: ToolCall, stamp: OperationStamp) -> Decision {
    decide_call(call, stamp).unwrap_or_else(|error| Decision::Rejected {
        reason: error.into(),
    })
}
