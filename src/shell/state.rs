use crate::modules::receipts::adapters::outbound::scanner_in_memory::InMemoryReceiptScanner;
use crate::modules::receipts::adapters::outbound::session_queries::SessionQueries;
use crate::modules::receipts::adapters::outbound::session_store_in_memory::InMemorySessionStore;
use crate::modules::receipts::use_cases::apply_tool_call::handler::ToolCallHandler;
use crate::modules::receipts::use_cases::start_receipt::handler::StartReceiptHandler;
use crate::modules::receipts::use_cases::view_receipt::queries_port::ReceiptQueries;
use crate::shell::workers::{ToolCallSender, spawn_tool_call_worker};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ReceiptQueries + Send + Sync>,
    pub start_handler: Arc<StartReceiptHandler<InMemorySessionStore, InMemoryReceiptScanner>>,
    pub tool_calls: ToolCallSender,
}

impl AppState {
    /// Wires the handlers over one shared store and spawns the tool call worker.
    pub fn in_memory(
        store: Arc<InMemorySessionStore>,
        scanner: Arc<InMemoryReceiptScanner>,
        tool_channel_capacity: usize,
    ) -> Self {
        let tool_handler = Arc::new(ToolCallHandler::new(store.clone()));
        Self {
            queries: Arc::new(SessionQueries::new(store.clone())),
            start_handler: Arc::new(StartReceiptHandler::new(store, scanner)),
            tool_calls: spawn_tool_call_worker(tool_handler, tool_channel_capacity),
        }
    }
}
