// Tool declaration catalog exposed to the voice agent.
//
// Purpose
// - Name the seven callable operations and describe their argument schemas.
//
// Responsibilities
// - Be the single place an operation name is recognised. Anything else is an unknown operation.
// - State in every description that money is in integer cents, so the agent formats arguments
//   correctly.

use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    AddReceiptItem,
    RemoveReceiptItem,
    UpdateReceiptItem,
    AddSplit,
    AddProportionalSplit,
    RemoveSplit,
    GetCurrentReceipt,
}

impl ToolName {
    pub const ALL: [ToolName; 7] = [
        ToolName::AddReceiptItem,
        ToolName::RemoveReceiptItem,
        ToolName::UpdateReceiptItem,
        ToolName::AddSplit,
        ToolName::AddProportionalSplit,
        ToolName::RemoveSplit,
        ToolName::GetCurrentReceipt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::AddReceiptItem => "add_receipt_item",
            ToolName::RemoveReceiptItem => "remove_receipt_item",
            ToolName::UpdateReceiptItem => "update_receipt_item",
            ToolName::AddSplit => "add_split",
            ToolName::AddProportionalSplit => "add_proportional_split",
            ToolName::RemoveSplit => "remove_split",
            ToolName::GetCurrentReceipt => "get_current_receipt",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| name.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDeclaration {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

fn object_schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

pub fn declaration(tool: ToolName) -> ToolDeclaration {
    let (description, parameters) = match tool {
        ToolName::AddReceiptItem => (
            "Add a new item to the receipt. unitPrice is the price of ONE unit in integer cents \
             (e.g. $3.50 = 350). quantity defaults to 1.",
            object_schema(
                json!({
                    "name": {"type": "string", "description": "Item name as printed or spoken."},
                    "unitPrice": {"type": "integer", "description": "Price of one unit in cents."},
                    "quantity": {"type": "integer", "minimum": 1, "description": "Number of units, default 1."},
                    "taxed": {"type": "boolean", "description": "Whether tax applies, default false."},
                    "id": {"type": "string", "description": "Optional id; one is generated when omitted."}
                }),
                &["name", "unitPrice"],
            ),
        ),
        ToolName::RemoveReceiptItem => (
            "Remove an item by id. Use get_current_receipt first to look the id up.",
            object_schema(
                json!({"id": {"type": "string", "description": "Id of the item to remove."}}),
                &["id"],
            ),
        ),
        ToolName::UpdateReceiptItem => (
            "Change fields of an existing item. Only the fields given are changed. \
             unitPrice is in integer cents.",
            object_schema(
                json!({
                    "id": {"type": "string", "description": "Id of the item to change."},
                    "name": {"type": "string"},
                    "unitPrice": {"type": "integer", "description": "New price of one unit in cents."},
                    "quantity": {"type": "integer", "minimum": 1},
                    "taxed": {"type": "boolean"}
                }),
                &["id"],
            ),
        ),
        ToolName::AddSplit => (
            "Assign a fixed amount of an item's cost to a person. amount is in integer cents.",
            object_schema(
                json!({
                    "itemId": {"type": "string", "description": "Id of the item being split."},
                    "person": {"type": "string", "description": "Name of the person paying."},
                    "amount": {"type": "integer", "minimum": 0, "description": "Amount in cents."},
                    "id": {"type": "string", "description": "Optional split id."}
                }),
                &["itemId", "person", "amount"],
            ),
        ),
        ToolName::AddProportionalSplit => (
            "Assign a share of an item's cost to a person, e.g. shares=1 totalShares=3 for a third. \
             The resulting amount is rounded to whole cents.",
            object_schema(
                json!({
                    "itemId": {"type": "string", "description": "Id of the item being split."},
                    "person": {"type": "string", "description": "Name of the person paying."},
                    "shares": {"type": "integer", "minimum": 1},
                    "totalShares": {"type": "integer", "minimum": 1},
                    "id": {"type": "string", "description": "Optional split id."}
                }),
                &["itemId", "person", "shares", "totalShares"],
            ),
        ),
        ToolName::RemoveSplit => (
            "Remove a split by id.",
            object_schema(
                json!({"id": {"type": "string", "description": "Id of the split to remove."}}),
                &["id"],
            ),
        ),
        ToolName::GetCurrentReceipt => (
            "Return the current items with their ids, the splits, and per-person totals in cents. \
             Changes nothing.",
            object_schema(json!({}), &[]),
        ),
    };
    ToolDeclaration {
        name: tool.as_str(),
        description,
        parameters,
    }
}

pub fn tool_declarations() -> Vec<ToolDeclaration> {
    ToolName::ALL.into_iter().map(declaration).collect()
}
