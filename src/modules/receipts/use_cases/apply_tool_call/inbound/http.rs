use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::receipts::use_cases::apply_tool_call::catalog::tool_declarations;
use crate::modules::receipts::use_cases::apply_tool_call::command::ToolInvocation;
use crate::modules::receipts::use_cases::apply_tool_call::response::ToolResponse;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallBatchBody {
    pub function_calls: Vec<ToolInvocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallBatchResponse {
    pub function_responses: Vec<ToolResponse>,
}

/// Every call gets a response, in the order received. Failures are reported per call.
pub async fn handle(
    State(state): State<AppState>,
    Path(receipt_id): Path<String>,
    body: Result<Json<ToolCallBatchBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let function_responses = state
        .tool_calls
        .submit_batch(&receipt_id, body.function_calls)
        .await;

    Json(ToolCallBatchResponse { function_responses }).into_response()
}

pub async fn tools() -> impl IntoResponse {
    Json(tool_declarations())
}
