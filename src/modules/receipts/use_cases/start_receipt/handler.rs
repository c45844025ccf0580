use crate::modules::receipts::core::ports::{SessionStore, SessionStoreError};
use crate::modules::receipts::core::receipt::Receipt;
use crate::modules::receipts::core::validation::ValidationError;
use crate::modules::receipts::use_cases::start_receipt::command::StartReceipt;
use crate::modules::receipts::use_cases::start_receipt::decide::decide_start;
use crate::modules::receipts::use_cases::start_receipt::scanner_port::{
    ReceiptImage, ReceiptScanner, ScanError,
};
use crate::shared::core::primitives::{new_id, now_millis};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

pub struct StartReceiptHandler<TStore, TScanner>
where
    TStore: SessionStore + 'static,
    TScanner: ReceiptScanner + 'static,
{
    store: Arc<TStore>,
    scanner: Arc<TScanner>,
}

impl<TStore, TScanner> StartReceiptHandler<TStore, TScanner>
where
    TStore: SessionStore + 'static,
    TScanner: ReceiptScanner + 'static,
{
    pub fn new(store: Arc<TStore>, scanner: Arc<TScanner>) -> Self {
        Self { store, scanner }
    }

    /// Installs a new baseline. Starting a known receipt id clears its logs.
    pub async fn start(&self, command: StartReceipt) -> Result<Receipt, ApplicationError> {
        let receipt = decide_start(command, new_id)?;
        self.store.start(receipt.clone()).await?;
        tracing::info!(
            receipt_id = %receipt.id,
            items = receipt.items.len(),
            "receipt session started"
        );
        Ok(receipt)
    }

    pub async fn scan_and_start(
        &self,
        receipt_id: Option<String>,
        image: &ReceiptImage,
    ) -> Result<Receipt, ApplicationError> {
        let scanned = self.scanner.scan(image).await.inspect_err(|error| {
            tracing::warn!(%error, mime_type = %image.mime_type, "receipt scan failed")
        })?;
        self.start(StartReceipt {
            receipt_id: receipt_id.unwrap_or_else(new_id),
            scanned,
            created_at: now_millis(),
        })
        .await
    }

    /// Drops every edit and split, keeping the baseline.
    pub async fn reset(&self, receipt_id: &str) -> Result<(), ApplicationError> {
        self.store.reset(receipt_id).await?;
        tracing::info!(receipt_id, "receipt session reset");
        Ok(())
    }

    /// Forgets the receipt. Tool calls for it fail with a missing reference afterwards.
    pub async fn discard(&self, receipt_id: &str) -> Result<(), ApplicationError> {
        self.store.discard(receipt_id).await?;
        tracing::info!(receipt_id, "receipt session discarded");
        Ok(())
    }
}

#[cfg(test)]
mod start_receipt_handler_tests {
    use super::*;
    use crate::modules::receipts::adapters::outbound::scanner_in_memory::InMemoryReceiptScanner;
    use crate::modules::receipts::adapters::outbound::session_store_in_memory::InMemorySessionStore;
    use crate::modules::receipts::core::operations::SessionEntry;
    use crate::tests::fixtures::operations::remove_item;
    use crate::tests::fixtures::receipts::make_scanned_receipt;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (StartReceipt, InMemorySessionStore, InMemoryReceiptScanner);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let command = StartReceipt {
            receipt_id: "r-scan-0001".into(),
            scanned: make_scanned_receipt(),
            created_at: 1_700_000_000_000,
        };
        (
            command,
            InMemorySessionStore::new(),
            InMemoryReceiptScanner::fixed(make_scanned_receipt()),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn start_installs_the_baseline(before_each: BeforeEachReturn) {
        let (command, store, scanner) = before_each;
        let store = Arc::new(store);
        let handler = StartReceiptHandler::new(store.clone(), Arc::new(scanner));

        let receipt = handler.start(command).await.expect("start failed");

        let session = store.load("r-scan-0001").await.expect("load failed");
        assert_eq!(session.baseline(), &receipt);
        assert_eq!(session.current_items().len(), 4);
    }

    #[rstest]
    #[tokio::test]
    async fn start_rejects_invalid_receipts_without_touching_the_store(
        before_each: BeforeEachReturn,
    ) {
        let (mut command, store, scanner) = before_each;
        command.scanned.tax = -5;
        let store = Arc::new(store);
        let handler = StartReceiptHandler::new(store.clone(), Arc::new(scanner));

        let result = handler.start(command).await;

        assert!(matches!(result, Err(ApplicationError::Validation(_))));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn restarting_a_receipt_clears_both_logs(before_each: BeforeEachReturn) {
        let (command, store, scanner) = before_each;
        let store = Arc::new(store);
        let handler = StartReceiptHandler::new(store.clone(), Arc::new(scanner));
        let receipt = handler.start(command.clone()).await.unwrap();
        store
            .append(
                &receipt.id,
                0,
                &[SessionEntry::Edit(remove_item("op-1", &receipt.items[0].id))],
            )
            .await
            .unwrap();

        handler.start(command).await.unwrap();

        let session = store.load(&receipt.id).await.unwrap();
        assert!(session.edit_log().is_empty());
        assert!(session.split_log().is_empty());
        assert_eq!(session.version(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn scan_and_start_uses_the_scanner(before_each: BeforeEachReturn) {
        let (_, store, scanner) = before_each;
        let handler = StartReceiptHandler::new(Arc::new(store), Arc::new(scanner));

        let receipt = handler
            .scan_and_start(
                Some("r-photo".into()),
                &ReceiptImage::from_encoded("data:image/jpeg;base64,AAAA"),
            )
            .await
            .unwrap();

        assert_eq!(receipt.id, "r-photo");
        assert_eq!(receipt.items[0].name, "Coffee");
    }

    #[rstest]
    #[tokio::test]
    async fn scan_failures_are_reported(before_each: BeforeEachReturn) {
        let (_, store, _) = before_each;
        let handler = StartReceiptHandler::new(
            Arc::new(store),
            Arc::new(InMemoryReceiptScanner::failing("model unavailable")),
        );

        let result = handler
            .scan_and_start(None, &ReceiptImage::from_encoded("AAAA"))
            .await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "receipt scan failed: model unavailable"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn discard_removes_the_session(before_each: BeforeEachReturn) {
        let (command, store, scanner) = before_each;
        let store = Arc::new(store);
        let handler = StartReceiptHandler::new(store.clone(), Arc::new(scanner));
        let receipt = handler.start(command).await.unwrap();

        handler.discard(&receipt.id).await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
        assert!(matches!(
            handler.reset(&receipt.id).await,
            Err(ApplicationError::Store(SessionStoreError::NotFound(_)))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn reset_of_an_unknown_receipt_fails(before_each: BeforeEachReturn) {
        let (_, store, scanner) = before_each;
        let handler = StartReceiptHandler::new(Arc::new(store), Arc::new(scanner));

        let result = handler.reset("r-missing").await;

        assert!(matches!(
            result,
            Err(ApplicationError::Store(SessionStoreError::NotFound(_)))
        ));
    }
}
