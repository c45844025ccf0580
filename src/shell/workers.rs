// Tool-call worker: the single consumer of inbound tool invocations.
//
// Transports never call the handler directly. They submit an invocation with a reply channel and
// wait; the worker handles requests strictly one at a time in arrival order.

use crate::modules::receipts::core::ports::SessionStore;
use crate::modules::receipts::use_cases::apply_tool_call::command::ToolInvocation;
use crate::modules::receipts::use_cases::apply_tool_call::decision::ToolCallError;
use crate::modules::receipts::use_cases::apply_tool_call::handler::ToolCallHandler;
use crate::modules::receipts::use_cases::apply_tool_call::response::ToolResponse;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

pub struct ToolCallRequest {
    pub receipt_id: String,
    pub invocations: Vec<ToolInvocation>,
    pub reply: oneshot::Sender<Vec<ToolResponse>>,
}

#[derive(Clone)]
pub struct ToolCallSender {
    tx: mpsc::Sender<ToolCallRequest>,
}

impl ToolCallSender {
    /// Waits for the worker to answer every call. A batch is never interleaved with another one.
    /// A stopped worker is reported as an upstream failure for each call.
    pub async fn submit_batch(
        &self,
        receipt_id: &str,
        invocations: Vec<ToolInvocation>,
    ) -> Vec<ToolResponse> {
        let (reply, responses) = oneshot::channel();
        let fallback = invocations.clone();
        let request = ToolCallRequest {
            receipt_id: receipt_id.to_string(),
            invocations,
            reply,
        };
        if self.tx.send(request).await.is_err() {
            return worker_stopped(fallback);
        }
        responses.await.unwrap_or_else(|_| worker_stopped(fallback))
    }

    pub async fn submit(&self, receipt_id: &str, invocation: ToolInvocation) -> ToolResponse {
        let fallback = invocation.clone();
        self.submit_batch(receipt_id, vec![invocation])
            .await
            .pop()
            .unwrap_or_else(|| {
                ToolResponse::new(
                    fallback,
                    Err(ToolCallError::Upstream("tool call worker gave no answer".into())),
                )
            })
    }
}

fn worker_stopped(invocations: Vec<ToolInvocation>) -> Vec<ToolResponse> {
    invocations
        .into_iter()
        .map(|invocation| {
            ToolResponse::new(
                invocation,
                Err(ToolCallError::Upstream("tool call worker stopped".into())),
            )
        })
        .collect()
}

pub fn tool_call_channel(capacity: usize) -> (ToolCallSender, mpsc::Receiver<ToolCallRequest>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (ToolCallSender { tx }, rx)
}

/// Runs until every sender is dropped.
pub async fn run_tool_calls<TStore>(
    handler: Arc<ToolCallHandler<TStore>>,
    mut requests: mpsc::Receiver<ToolCallRequest>,
) where
    TStore: SessionStore + 'static,
{
    tracing::info!("tool call worker started");
    while let Some(request) = requests.recv().await {
        let responses = handler
            .handle_batch(&request.receipt_id, request.invocations)
            .await;
        if request.reply.send(responses).is_err() {
            tracing::debug!(receipt_id = %request.receipt_id, "tool call caller went away");
        }
    }
    tracing::info!("tool call worker stopped");
}

pub fn spawn_tool_call_worker<TStore>(
    handler: Arc<ToolCallHandler<TStore>>,
    capacity: usize,
) -> ToolCallSender
where
    TStore: SessionStore + 'static,
{
    let (sender, requests) = tool_call_channel(capacity);
    tokio::spawn(run_tool_calls(handler, requests));
    sender
}
