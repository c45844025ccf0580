// Read side over any SessionStore: replays the logs on every query.

use crate::modules::receipts::core::ports::{SessionStore, SessionStoreError};
use crate::modules::receipts::core::receipt::Receipt;
use crate::modules::receipts::use_cases::view_receipt::projection::ReceiptView;
use crate::modules::receipts::use_cases::view_receipt::queries_port::ReceiptQueries;
use async_trait::async_trait;
use std::sync::Arc;

pub struct SessionQueries<TStore>
where
    TStore: SessionStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SessionQueries<TStore>
where
    TStore: SessionStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<TStore> ReceiptQueries for SessionQueries<TStore>
where
    TStore: SessionStore + 'static,
{
    async fn current(&self, receipt_id: &str) -> anyhow::Result<Option<ReceiptView>> {
        match self.store.load(receipt_id).await {
            Ok(session) => Ok(Some(ReceiptView::from_session(&session))),
            Err(SessionStoreError::NotFound(_)) => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn list(&self) -> anyhow::Result<Vec<Receipt>> {
        Ok(self.store.list().await?)
    }
}
