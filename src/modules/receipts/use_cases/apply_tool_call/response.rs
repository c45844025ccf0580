// Result message returned to the agent for every tool invocation.
//
// Responsibilities
// - Echo the invocation's id and name so the agent can match responses to calls.
// - Carry either a success payload or an error kind with a human readable message. The transport
//   never sees a Rust error.

use crate::modules::receipts::use_cases::apply_tool_call::command::ToolInvocation;
use crate::modules::receipts::use_cases::apply_tool_call::decision::{ErrorKind, ToolCallError};
use crate::modules::receipts::use_cases::view_receipt::projection::ReceiptView;
use serde::{Deserialize, Serialize};

/// What a successful call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    Appended {
        assigned_id: Option<String>,
        warning: Option<String>,
    },
    Receipt(ReceiptView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum ToolResult {
    Ok {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        warning: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        receipt: Option<ReceiptView>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        summary: Option<String>,
    },
    Error {
        kind: ErrorKind,
        error: String,
    },
}

impl From<Result<ToolOutcome, ToolCallError>> for ToolResult {
    fn from(result: Result<ToolOutcome, ToolCallError>) -> Self {
        match result {
            Ok(ToolOutcome::Appended {
                assigned_id,
                warning,
            }) => ToolResult::Ok {
                id: assigned_id,
                warning,
                receipt: None,
                summary: None,
            },
            Ok(ToolOutcome::Receipt(view)) => ToolResult::Ok {
                id: None,
                warning: None,
                summary: Some(view.summary_text()),
                receipt: Some(view),
            },
            Err(error) => ToolResult::Error {
                kind: error.kind(),
                error: error.to_string(),
            },
        }
    }
}

impl ToolResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, ToolResult::Ok { .. })
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            ToolResult::Ok { .. } => None,
            ToolResult::Error { kind, .. } => Some(*kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub response: ToolResult,
}

impl ToolResponse {
    pub fn new(invocation: ToolInvocation, result: Result<ToolOutcome, ToolCallError>) -> Self {
        Self {
            id: invocation.id,
            name: invocation.name,
            response: result.into(),
        }
    }
}
