use async_graphql::{Context, Json, Object, Result as GqlResult};
use serde_json::Value;

use crate::modules::receipts::use_cases::apply_tool_call::catalog::{
    ToolDeclaration, tool_declarations,
};
use crate::modules::receipts::use_cases::apply_tool_call::command::ToolInvocation;
use crate::modules::receipts::use_cases::apply_tool_call::response::{ToolResponse, ToolResult};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlToolDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Json<Value>,
}

impl From<ToolDeclaration> for GqlToolDeclaration {
    fn from(declaration: ToolDeclaration) -> Self {
        Self {
            name: declaration.name.to_string(),
            description: declaration.description.to_string(),
            parameters: Json(declaration.parameters),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlToolResponse {
    pub id: Option<String>,
    pub name: String,
    pub ok: bool,
    pub assigned_id: Option<String>,
    pub warning: Option<String>,
    pub summary: Option<String>,
    pub error_kind: Option<String>,
    pub error: Option<String>,
}

impl From<ToolResponse> for GqlToolResponse {
    fn from(response: ToolResponse) -> Self {
        let mut gql = Self {
            id: response.id,
            name: response.name,
            ok: response.response.is_ok(),
            assigned_id: None,
            warning: None,
            summary: None,
            error_kind: None,
            error: None,
        };
        match response.response {
            ToolResult::Ok {
                id,
                warning,
                summary,
                ..
            } => {
                gql.assigned_id = id;
                gql.warning = warning;
                gql.summary = summary;
            }
            ToolResult::Error { kind, error } => {
                gql.error_kind = Some(format!("{kind:?}"));
                gql.error = Some(error);
            }
        }
        gql
    }
}

#[derive(Default)]
pub struct ToolCatalogQuery;

#[Object]
impl ToolCatalogQuery {
    async fn tools(&self) -> Vec<GqlToolDeclaration> {
        tool_declarations().into_iter().map(Into::into).collect()
    }
}

#[derive(Default)]
pub struct ToolCallMutation;

#[Object]
impl ToolCallMutation {
    async fn invoke_tool(
        &self,
        context: &Context<'_>,
        receipt_id: String,
        name: String,
        args: Option<Json<Value>>,
        id: Option<String>,
    ) -> GqlResult<GqlToolResponse> {
        let state = context.data_unchecked::<AppState>();
        let invocation = ToolInvocation {
            id,
            name,
            args: args.map(|Json(args)| args).unwrap_or(Value::Null),
        };
        Ok(state.tool_calls.submit(&receipt_id, invocation).await.into())
    }
}
