use crate::modules::receipts::core::receipt::Receipt;
use crate::modules::receipts::use_cases::view_receipt::projection::ReceiptView;
use async_trait::async_trait;

#[async_trait]
pub trait ReceiptQueries {
    /// `None` when no session exists for `receipt_id`.
    async fn current(&self, receipt_id: &str) -> anyhow::Result<Option<ReceiptView>>;
    async fn list(&self) -> anyhow::Result<Vec<Receipt>>;
}
