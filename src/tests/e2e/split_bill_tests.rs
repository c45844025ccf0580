use crate::modules::receipts::adapters::outbound::scanner_in_memory::InMemoryReceiptScanner;
use crate::modules::receipts::adapters::outbound::session_queries::SessionQueries;
use crate::modules::receipts::adapters::outbound::session_store_in_memory::InMemorySessionStore;
use crate::modules::receipts::core::aggregate::PersonTotals;
use crate::modules::receipts::use_cases::apply_tool_call::command::ToolInvocation;
use crate::modules::receipts::use_cases::apply_tool_call::handler::ToolCallHandler;
use crate::modules::receipts::use_cases::apply_tool_call::response::ToolResult;
use crate::modules::receipts::use_cases::start_receipt::command::{
    ScannedItem, ScannedReceipt, StartReceipt,
};
use crate::modules::receipts::use_cases::start_receipt::handler::StartReceiptHandler;
use crate::modules::receipts::use_cases::start_receipt::scanner_port::ReceiptImage;
use crate::modules::receipts::use_cases::view_receipt::projection::ReceiptView;
use crate::modules::receipts::use_cases::view_receipt::queries_port::ReceiptQueries;
use crate::tests::fixtures::receipts::make_scanned_receipt;
use serde_json::{Value, json};
use std::sync::Arc;

const RECEIPT_ID: &str = "r-e2e-0001";

struct App {
    start: StartReceiptHandler<InMemorySessionStore, InMemoryReceiptScanner>,
    tools: ToolCallHandler<InMemorySessionStore>,
    queries: SessionQueries<InMemorySessionStore>,
}

impl App {
    async fn with_items(items: &[(&str, i64)], tax: i64, tip: i64) -> Self {
        let store = Arc::new(InMemorySessionStore::new());
        let scanner = Arc::new(InMemoryReceiptScanner::fixed(make_scanned_receipt()));
        let app = Self {
            start: StartReceiptHandler::new(store.clone(), scanner),
            tools: ToolCallHandler::new(store.clone()),
            queries: SessionQueries::new(store),
        };
        let scanned = ScannedReceipt {
            items: items
                .iter()
                .map(|(name, unit_price)| ScannedItem {
                    id: Some(format!("i-{}", name.to_lowercase())),
                    name: name.to_string(),
                    unit_price: *unit_price,
                    quantity: 1,
                    taxed: true,
                })
                .collect(),
            tax,
            tip,
        };
        app.start
            .start(StartReceipt {
                receipt_id: RECEIPT_ID.into(),
                scanned,
                created_at: 1_700_000_000_000,
            })
            .await
            .expect("start failed");
        app
    }

    async fn call(&self, name: &str, args: Value) -> ToolResult {
        self.tools
            .handle(RECEIPT_ID, ToolInvocation::new(name, args))
            .await
            .response
    }

    async fn view(&self) -> ReceiptView {
        self.queries
            .current(RECEIPT_ID)
            .await
            .expect("query failed")
            .expect("receipt missing")
    }
}

fn assigned_id(result: ToolResult) -> String {
    match result {
        ToolResult::Ok { id: Some(id), .. } => id,
        other => panic!("expected an assigned id, got {other:?}"),
    }
}

#[tokio::test]
async fn an_unsplit_receipt_leaves_everything_unsplit() {
    let app = App::with_items(&[("Coffee", 300)], 0, 0).await;

    let view = app.view().await;

    assert!(view.totals.person_totals.is_empty());
    assert_eq!(view.totals.unsplit_amount, 300);
}

#[tokio::test]
async fn halving_a_pizza_shares_tax_and_tip_evenly() {
    let app = App::with_items(&[("Pizza", 1000)], 100, 200).await;

    for person in ["Bob", "Charlie"] {
        let result = app
            .call(
                "add_proportional_split",
                json!({"itemId": "i-pizza", "person": person, "shares": 1, "totalShares": 2}),
            )
            .await;
        assert!(result.is_ok(), "{result:?}");
    }

    let view = app.view().await;
    let expected = PersonTotals {
        subtotal: 500,
        tax: 50,
        tip: 100,
        total: 650,
    };
    assert_eq!(view.totals.person_totals["Bob"], expected);
    assert_eq!(view.totals.person_totals["Charlie"], expected);
    assert_eq!(view.totals.unsplit_amount, 0);
}

#[tokio::test]
async fn adding_and_removing_an_item_leaves_the_baseline() {
    let app = App::with_items(&[("Coffee", 300)], 0, 0).await;
    let baseline_items = app.view().await.items;

    let bagel_id = assigned_id(
        app.call(
            "add_receipt_item",
            json!({"name": "Bagel", "unitPrice": 250, "quantity": 2}),
        )
        .await,
    );
    assert_eq!(app.view().await.totals.subtotal, 800);
    app.call("remove_receipt_item", json!({"id": bagel_id})).await;

    let view = app.view().await;
    assert_eq!(view.items, baseline_items);
    assert_eq!(view.edit_count, 2);
}

#[tokio::test]
async fn updating_a_missing_item_is_acknowledged_and_recorded() {
    let app = App::with_items(&[("Coffee", 300)], 0, 0).await;
    let baseline_items = app.view().await.items;

    let result = app
        .call("update_receipt_item", json!({"id": "i-missing", "unitPrice": 400}))
        .await;

    assert!(result.is_ok());
    let view = app.view().await;
    assert_eq!(view.items, baseline_items);
    assert_eq!(view.edit_count, 1);
}

#[tokio::test]
async fn splits_on_removed_items_stay_logged_but_stop_counting() {
    let app = App::with_items(&[("Coffee", 300), ("Pizza", 1000)], 0, 0).await;

    app.call(
        "add_split",
        json!({"itemId": "i-coffee", "person": "Bob", "amount": 200}),
    )
    .await;
    assert_eq!(app.view().await.totals.person_totals["Bob"].total, 200);
    app.call("remove_receipt_item", json!({"id": "i-coffee"})).await;

    let view = app.view().await;
    assert_eq!(view.split_count, 1);
    assert_eq!(view.splits.len(), 1);
    assert!(view.totals.person_totals.is_empty());
    assert_eq!(view.totals.unsplit_amount, 1000);
    assert_eq!(view.totals.grand_total, 1000);
}

#[tokio::test]
async fn restarting_with_a_new_scan_drops_the_history() {
    let app = App::with_items(&[("Coffee", 300)], 0, 0).await;
    app.call(
        "add_split",
        json!({"itemId": "i-coffee", "person": "Bob", "amount": 300}),
    )
    .await;

    app.start
        .scan_and_start(
            Some(RECEIPT_ID.into()),
            &ReceiptImage::from_encoded("AAAA"),
        )
        .await
        .expect("rescan failed");

    let view = app.view().await;
    assert_eq!(view.edit_count, 0);
    assert_eq!(view.split_count, 0);
    assert_eq!(view.totals.grand_total, 300 + 500 + 45 + 100);
    assert_eq!(app.queries.list().await.unwrap().len(), 1);
}
