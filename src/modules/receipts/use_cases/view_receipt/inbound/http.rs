use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list().await {
        Ok(receipts) => Json(receipts).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing receipts failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn current(
    State(state): State<AppState>,
    Path(receipt_id): Path<String>,
) -> impl IntoResponse {
    match state.queries.current(&receipt_id).await {
        Ok(Some(view)) => Json(view).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => {
            tracing::error!(%error, receipt_id, "loading receipt failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
