use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::receipts::core::ports::SessionStoreError;
use crate::modules::receipts::use_cases::start_receipt::command::{ScannedReceipt, StartReceipt};
use crate::modules::receipts::use_cases::start_receipt::handler::ApplicationError;
use crate::modules::receipts::use_cases::start_receipt::scanner_port::ReceiptImage;
use crate::shared::core::primitives::{new_id, now_millis};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartReceiptBody {
    #[serde(default)]
    pub receipt_id: Option<String>,
    #[serde(flatten)]
    pub scanned: ScannedReceipt,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReceiptBody {
    #[serde(default)]
    pub receipt_id: Option<String>,
    /// Base64 image, optionally as a data URL.
    pub image: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(error: ApplicationError) -> axum::response::Response {
    let status = match &error {
        ApplicationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::Scan(_) => StatusCode::BAD_GATEWAY,
        ApplicationError::Store(SessionStoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub async fn start(
    State(state): State<AppState>,
    body: Result<Json<StartReceiptBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = StartReceipt {
        receipt_id: body.receipt_id.unwrap_or_else(new_id),
        scanned: body.scanned,
        created_at: now_millis(),
    };

    match state.start_handler.start(command).await {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn scan(
    State(state): State<AppState>,
    body: Result<Json<ScanReceiptBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let image = ReceiptImage::from_encoded(&body.image);
    match state
        .start_handler
        .scan_and_start(body.receipt_id, &image)
        .await
    {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn reset(
    State(state): State<AppState>,
    Path(receipt_id): Path<String>,
) -> impl IntoResponse {
    match state.start_handler.reset(&receipt_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn discard(
    State(state): State<AppState>,
    Path(receipt_id): Path<String>,
) -> impl IntoResponse {
    match state.start_handler.discard(&receipt_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
