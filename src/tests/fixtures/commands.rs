// Builder for tool invocations, seeded from an add_receipt_item call stored as JSON.

use crate::modules::receipts::use_cases::apply_tool_call::command::ToolInvocation;
use serde_json::Value;
use std::fs;

pub struct ToolInvocationBuilder {
    inner: ToolInvocation,
}

impl Default for ToolInvocationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ToolInvocationBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/json/add_receipt_item_call.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = Some(v.into());
        self
    }

    pub fn without_id(mut self) -> Self {
        self.inner.id = None;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn args(mut self, v: Value) -> Self {
        self.inner.args = v;
        self
    }

    pub fn build(self) -> ToolInvocation {
        self.inner
    }
}

#[cfg(test)]
mod tool_invocation_builder_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ToolInvocationBuilder::default().build();
        assert_eq!(built.id.as_deref(), Some("call-fixed-0001"));
        assert_eq!(built.name, "add_receipt_item");
        assert_eq!(built.args["name"], json!("Milk"));
        assert_eq!(built.args["unitPrice"], json!(250));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let built = ToolInvocationBuilder::new()
            .id("call-2")
            .name("remove_split")
            .args(json!({"id": "s-1"}))
            .build();
        assert_eq!(built.id.as_deref(), Some("call-2"));
        assert_eq!(built.name, "remove_split");
        assert_eq!(built.args, json!({"id": "s-1"}));
        assert_eq!(ToolInvocationBuilder::new().without_id().build().id, None);
    }
}
