use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::receipts::use_cases::apply_tool_call::inbound::http as tool_call_http;
use crate::modules::receipts::use_cases::start_receipt::inbound::http as start_http;
use crate::modules::receipts::use_cases::view_receipt::inbound::http as view_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState, graphql_path: &str) -> Router {
    let schema = build_schema(state.clone());
    let graphiql_page = graphiql(graphql_path);

    Router::new()
        .route("/receipts", get(view_http::list).post(start_http::start))
        .route("/receipts/scan", post(start_http::scan))
        .route(
            "/receipts/{receipt_id}",
            get(view_http::current).delete(start_http::discard),
        )
        .route("/receipts/{receipt_id}/reset", post(start_http::reset))
        .route("/receipts/{receipt_id}/tool-calls", post(tool_call_http::handle))
        .route("/tools", get(tool_call_http::tools))
        .route(
            graphql_path,
            get(move || async move { graphiql_page }).post(graphql),
        )
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
