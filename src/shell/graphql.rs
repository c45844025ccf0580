use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

use crate::modules::receipts::use_cases::apply_tool_call::inbound::graphql::{
    ToolCallMutation, ToolCatalogQuery,
};
use crate::modules::receipts::use_cases::start_receipt::inbound::graphql::StartReceiptMutation;
use crate::modules::receipts::use_cases::view_receipt::inbound::graphql::ReceiptQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ReceiptQuery, ToolCatalogQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(StartReceiptMutation, ToolCallMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub fn graphiql(endpoint: &str) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(endpoint).finish())
}
