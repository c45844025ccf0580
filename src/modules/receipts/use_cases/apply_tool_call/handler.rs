// Application service for agent tool calls.
//
// Flow per invocation: parse the name and arguments, load the session, decide, then either answer
// the query from the loaded snapshot or compare-and-append the decided entries.
//
// A call either appends everything it decided or nothing. Conflicting writers surface as an
// upstream failure; the agent may retry the call.

use crate::modules::receipts::core::ports::SessionStore;
use crate::modules::receipts::use_cases::apply_tool_call::command::{
    OperationStamp, ToolCall, ToolInvocation,
};
use crate::modules::receipts::use_cases::apply_tool_call::decide::decide;
use crate::modules::receipts::use_cases::apply_tool_call::decision::{Decision, ToolCallError};
use crate::modules::receipts::use_cases::apply_tool_call::response::{ToolOutcome, ToolResponse};
use crate::modules::receipts::use_cases::view_receipt::projection::ReceiptView;
use std::sync::Arc;

pub struct ToolCallHandler<TStore>
where
    TStore: SessionStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ToolCallHandler<TStore>
where
    TStore: SessionStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn try_handle(
        &self,
        receipt_id: &str,
        invocation: &ToolInvocation,
    ) -> Result<ToolOutcome, ToolCallError> {
        let call = ToolCall::parse(invocation)?;
        let tool = call.tool();
        let session = self.store.load(receipt_id).await?;

        match decide(call, OperationStamp::now()) {
            Decision::Accepted {
                entries,
                assigned_id,
            } => {
                let warning = entries
                    .iter()
                    .find_map(|entry| session.missing_reference(entry));
                let version = self
                    .store
                    .append(receipt_id, session.version(), &entries)
                    .await?;
                for entry in &entries {
                    tracing::debug!(
                        receipt_id,
                        %tool,
                        version,
                        operation_id = entry.operation_id(),
                        target_id = entry.target_id(),
                        "appended tool call entry"
                    );
                }
                Ok(ToolOutcome::Appended {
                    assigned_id,
                    warning,
                })
            }
            Decision::Query => {
                tracing::debug!(receipt_id, %tool, version = session.version(), "answered query");
                Ok(ToolOutcome::Receipt(ReceiptView::from_session(&session)))
            }
            Decision::Rejected { reason } => Err(reason),
        }
    }

    /// Never fails: errors are folded into the response for the agent.
    pub async fn handle(&self, receipt_id: &str, invocation: ToolInvocation) -> ToolResponse {
        let result = self.try_handle(receipt_id, &invocation).await;
        match &result {
            Ok(ToolOutcome::Appended {
                warning: Some(warning),
                ..
            }) => tracing::warn!(receipt_id, tool = %invocation.name, %warning, "tool call had no effect"),
            Ok(_) => tracing::info!(receipt_id, tool = %invocation.name, "tool call applied"),
            Err(error) => {
                tracing::warn!(receipt_id, tool = %invocation.name, kind = ?error.kind(), %error, "tool call failed")
            }
        }
        ToolResponse::new(invocation, result)
    }

    /// Processes the calls one after another, in the order given. A failing call does not stop
    /// the ones after it.
    pub async fn handle_batch(
        &self,
        receipt_id: &str,
        invocations: Vec<ToolInvocation>,
    ) -> Vec<ToolResponse> {
        let mut responses = Vec::with_capacity(invocations.len());
        for invocation in invocations {
            responses.push(self.handle(receipt_id, invocation).await);
        }
        responses
    }
}
