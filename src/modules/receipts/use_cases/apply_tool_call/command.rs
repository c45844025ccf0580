// Inbound tool invocation and its parsed, closed form.
//
// Purpose
// - `ToolInvocation` is what the transport delivers: a name and a loose argument map.
// - `ToolCall` has one variant per catalog entry with typed, required-checked arguments.
//
// Responsibilities
// - Reject names outside the catalog before looking at arguments.
// - Turn missing or mistyped arguments into validation errors; range checks happen in decide.

use crate::modules::receipts::core::item::{ReceiptItemPatch, default_quantity};
use crate::modules::receipts::core::validation::ValidationError;
use crate::modules::receipts::use_cases::apply_tool_call::catalog::ToolName;
use crate::modules::receipts::use_cases::apply_tool_call::decision::ToolCallError;
use crate::shared::core::primitives::{Cents, EpochMillis, new_id, now_millis};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

impl ToolInvocation {
    pub fn new(name: impl Into<String>, args: Value) -> Self {
        Self {
            id: None,
            name: name.into(),
            args,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReceiptItemArgs {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(alias = "price")]
    pub unit_price: Cents,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub taxed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetArgs {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateReceiptItemArgs {
    pub id: String,
    #[serde(flatten)]
    pub patch: ReceiptItemPatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSplitArgs {
    #[serde(default)]
    pub id: Option<String>,
    pub item_id: String,
    pub person: String,
    pub amount: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProportionalSplitArgs {
    #[serde(default)]
    pub id: Option<String>,
    pub item_id: String,
    pub person: String,
    pub shares: u32,
    pub total_shares: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    AddReceiptItem(AddReceiptItemArgs),
    RemoveReceiptItem(TargetArgs),
    UpdateReceiptItem(UpdateReceiptItemArgs),
    AddSplit(AddSplitArgs),
    AddProportionalSplit(AddProportionalSplitArgs),
    RemoveSplit(TargetArgs),
    GetCurrentReceipt,
}

fn parse_args<T: DeserializeOwned>(args: &Value) -> Result<T, ToolCallError> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };
    serde_json::from_value(args)
        .map_err(|e| ValidationError::MalformedArguments(e.to_string()).into())
}

impl ToolCall {
    pub fn parse(invocation: &ToolInvocation) -> Result<Self, ToolCallError> {
        let tool: ToolName = invocation
            .name
            .parse()
            .map_err(ToolCallError::UnknownOperation)?;
        let args = &invocation.args;
        Ok(match tool {
            ToolName::AddReceiptItem => ToolCall::AddReceiptItem(parse_args(args)?),
            ToolName::RemoveReceiptItem => ToolCall::RemoveReceiptItem(parse_args(args)?),
            ToolName::UpdateReceiptItem => ToolCall::UpdateReceiptItem(parse_args(args)?),
            ToolName::AddSplit => ToolCall::AddSplit(parse_args(args)?),
            ToolName::AddProportionalSplit => ToolCall::AddProportionalSplit(parse_args(args)?),
            ToolName::RemoveSplit => ToolCall::RemoveSplit(parse_args(args)?),
            ToolName::GetCurrentReceipt => ToolCall::GetCurrentReceipt,
        })
    }

    pub fn tool(&self) -> ToolName {
        match self {
            ToolCall::AddReceiptItem(_) => ToolName::AddReceiptItem,
            ToolCall::RemoveReceiptItem(_) => ToolName::RemoveReceiptItem,
            ToolCall::UpdateReceiptItem(_) => ToolName::UpdateReceiptItem,
            ToolCall::AddSplit(_) => ToolName::AddSplit,
            ToolCall::AddProportionalSplit(_) => ToolName::AddProportionalSplit,
            ToolCall::RemoveSplit(_) => ToolName::RemoveSplit,
            ToolCall::GetCurrentReceipt => ToolName::GetCurrentReceipt,
        }
    }
}

/// Identity and time handed to decide, so that decide itself stays pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStamp {
    pub operation_id: String,
    /// Used when the call creates an item or split and supplies no id of its own.
    pub fresh_id: String,
    pub at: EpochMillis,
}

impl OperationStamp {
    pub fn now() -> Self {
        Self {
            operation_id: new_id(),
            fresh_id: new_id(),
            at: now_millis(),
        }
    }
}
