use async_graphql::{Context, Json, Object, Result as GqlResult};

use crate::modules::receipts::use_cases::start_receipt::command::{ScannedReceipt, StartReceipt};
use crate::modules::receipts::use_cases::start_receipt::scanner_port::ReceiptImage;
use crate::modules::receipts::use_cases::view_receipt::inbound::graphql::GqlReceiptBaseline;
use crate::shared::core::primitives::{new_id, now_millis};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct StartReceiptMutation;

#[Object]
impl StartReceiptMutation {
    async fn start_receipt(
        &self,
        context: &Context<'_>,
        receipt_id: Option<String>,
        scanned: Json<ScannedReceipt>,
    ) -> GqlResult<GqlReceiptBaseline> {
        let state = context.data_unchecked::<AppState>();
        let command = StartReceipt {
            receipt_id: receipt_id.unwrap_or_else(new_id),
            scanned: scanned.0,
            created_at: now_millis(),
        };
        let receipt = state.start_handler.start(command).await?;
        Ok(receipt.into())
    }

    async fn scan_receipt(
        &self,
        context: &Context<'_>,
        receipt_id: Option<String>,
        image: String,
    ) -> GqlResult<GqlReceiptBaseline> {
        let state = context.data_unchecked::<AppState>();
        let receipt = state
            .start_handler
            .scan_and_start(receipt_id, &ReceiptImage::from_encoded(&image))
            .await?;
        Ok(receipt.into())
    }

    async fn reset_receipt(&self, context: &Context<'_>, receipt_id: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.start_handler.reset(&receipt_id).await?;
        Ok(true)
    }

    async fn discard_receipt(&self, context: &Context<'_>, receipt_id: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.start_handler.discard(&receipt_id).await?;
        Ok(true)
    }
}
