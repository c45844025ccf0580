// In memory implementation of the SessionStore port.
//
// Purpose
// - Hold the ephemeral receipt sessions of a running process; nothing survives a restart.
//
// Responsibilities
// - Keep one session per receipt id behind a single RwLock. An append holds the write lock for its
//   whole duration, so readers see the log either before or after it.
// - Enforce compare-and-append by checking the expected version.

use crate::modules::receipts::core::operations::SessionEntry;
use crate::modules::receipts::core::ports::{SessionStore, SessionStoreError};
use crate::modules::receipts::core::receipt::Receipt;
use crate::modules::receipts::core::session::ReceiptSession;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySessionStore {
    inner: RwLock<HashMap<String, ReceiptSession>>,
    offline: bool,
    delay_append_ms: Option<u64>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn set_delay_append_ms(&mut self, delay_ms: u64) {
        self.delay_append_ms = Some(delay_ms);
    }

    fn ensure_online(&self) -> Result<(), SessionStoreError> {
        if self.offline {
            return Err(SessionStoreError::Backend("Session store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, receipt_id: &str) -> Result<ReceiptSession, SessionStoreError> {
        self.ensure_online()?;
        self.inner
            .read()
            .await
            .get(receipt_id)
            .cloned()
            .ok_or_else(|| SessionStoreError::NotFound(receipt_id.to_string()))
    }

    async fn start(&self, baseline: Receipt) -> Result<(), SessionStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        match guard.get_mut(&baseline.id) {
            Some(session) => session.restart(baseline),
            None => {
                guard.insert(baseline.id.clone(), ReceiptSession::new(baseline));
            }
        }
        Ok(())
    }

    async fn reset(&self, receipt_id: &str) -> Result<(), SessionStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let session = guard
            .get_mut(receipt_id)
            .ok_or_else(|| SessionStoreError::NotFound(receipt_id.to_string()))?;
        let baseline = session.baseline().clone();
        session.restart(baseline);
        Ok(())
    }

    async fn discard(&self, receipt_id: &str) -> Result<(), SessionStoreError> {
        self.ensure_online()?;
        self.inner
            .write()
            .await
            .remove(receipt_id)
            .map(|_| ())
            .ok_or_else(|| SessionStoreError::NotFound(receipt_id.to_string()))
    }

    async fn append(
        &self,
        receipt_id: &str,
        expected_version: i64,
        entries: &[SessionEntry],
    ) -> Result<i64, SessionStoreError> {
        self.ensure_online()?;
        if let Some(delay_ms) = self.delay_append_ms {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        let mut guard = self.inner.write().await;
        let session = guard
            .get_mut(receipt_id)
            .ok_or_else(|| SessionStoreError::NotFound(receipt_id.to_string()))?;
        let actual = session.version();
        if actual != expected_version {
            return Err(SessionStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        for entry in entries {
            session.record(entry.clone());
        }
        Ok(session.version())
    }

    async fn list(&self) -> Result<Vec<Receipt>, SessionStoreError> {
        self.ensure_online()?;
        let mut receipts: Vec<Receipt> = self
            .inner
            .read()
            .await
            .values()
            .map(|session| session.baseline().clone())
            .collect();
        receipts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(receipts)
    }
}

#[cfg(test)]
mod in_memory_session_store_tests {
    use super::*;
    use crate::modules::receipts::core::item::ReceiptItem;
    use crate::tests::fixtures::operations::{add_item, remove_item};
    use crate::tests::fixtures::receipts::make_baseline_receipt;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    #[fixture]
    fn baseline() -> Receipt {
        make_baseline_receipt()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_start_and_load_a_session(baseline: Receipt) {
        let store = InMemorySessionStore::new();
        store.start(baseline.clone()).await.expect("start failed");
        let session = store.load(&baseline.id).await.expect("load failed");
        assert_eq!(session.baseline(), &baseline);
        assert_eq!(session.version(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_load_an_unknown_receipt() {
        let store = InMemorySessionStore::new();
        assert_eq!(
            store.load("r-missing").await,
            Err(SessionStoreError::NotFound("r-missing".into()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_entries_in_order(baseline: Receipt) {
        let store = InMemorySessionStore::new();
        store.start(baseline.clone()).await.unwrap();
        let entries = vec![
            SessionEntry::Edit(add_item("op-1", ReceiptItem::new("i-bagel", "Bagel", 250))),
            SessionEntry::Edit(remove_item("op-2", "i-coffee")),
        ];
        let version = store.append(&baseline.id, 0, &entries).await.unwrap();
        assert_eq!(version, 2);
        let session = store.load(&baseline.id).await.unwrap();
        let ids: Vec<_> = session
            .edit_log()
            .to_sequence()
            .iter()
            .map(|l| l.operation_id.clone())
            .collect();
        assert_eq!(ids, vec!["op-1", "op-2"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_append_if_the_wrong_version_is_expected(baseline: Receipt) {
        let store = InMemorySessionStore::new();
        store.start(baseline.clone()).await.unwrap();
        let result = store
            .append(&baseline.id, 1, &[SessionEntry::Edit(remove_item("op-1", "i-coffee"))])
            .await;
        assert_eq!(
            result,
            Err(SessionStoreError::VersionMismatch {
                expected: 1,
                actual: 0
            })
        );
        assert!(store.load(&baseline.id).await.unwrap().edit_log().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_let_only_one_of_two_racing_appends_win(baseline: Receipt) {
        let mut store = InMemorySessionStore::new();
        store.set_delay_append_ms(10);
        store.start(baseline.clone()).await.unwrap();
        let store = Arc::new(store);
        let first = [SessionEntry::Edit(remove_item("op-1", "i-coffee"))];
        let second = [SessionEntry::Edit(remove_item("op-2", "i-pizza"))];
        let (a, b) = tokio::join!(
            store.append(&baseline.id, 0, &first),
            store.append(&baseline.id, 0, &second)
        );
        assert!(a.is_ok() ^ b.is_ok(), "exactly one append should win");
        assert_eq!(store.load(&baseline.id).await.unwrap().edit_log().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_the_baseline_and_clear_logs_on_restart(baseline: Receipt) {
        let store = InMemorySessionStore::new();
        store.start(baseline.clone()).await.unwrap();
        store
            .append(&baseline.id, 0, &[SessionEntry::Edit(remove_item("op-1", "i-coffee"))])
            .await
            .unwrap();
        let replacement = Receipt::new(baseline.id.clone(), vec![], baseline.created_at + 1);
        store.start(replacement.clone()).await.unwrap();
        let session = store.load(&baseline.id).await.unwrap();
        assert_eq!(session.baseline(), &replacement);
        assert!(session.edit_log().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reset_edits_back_to_the_baseline(baseline: Receipt) {
        let store = InMemorySessionStore::new();
        store.start(baseline.clone()).await.unwrap();
        store
            .append(&baseline.id, 0, &[SessionEntry::Edit(remove_item("op-1", "i-coffee"))])
            .await
            .unwrap();
        store.reset(&baseline.id).await.unwrap();
        let session = store.load(&baseline.id).await.unwrap();
        assert_eq!(session.current_items(), baseline.items);
        assert_eq!(session.version(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_newest_receipts_first(baseline: Receipt) {
        let store = InMemorySessionStore::new();
        store.start(baseline.clone()).await.unwrap();
        let newer = Receipt::new("r-newer", vec![], baseline.created_at + 10);
        store.start(newer.clone()).await.unwrap();
        let ids: Vec<_> = store.list().await.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![newer.id, baseline.id]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_forget_a_discarded_session(baseline: Receipt) {
        let store = InMemorySessionStore::new();
        store.start(baseline.clone()).await.unwrap();

        store.discard(&baseline.id).await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
        assert_eq!(
            store.load(&baseline.id).await,
            Err(SessionStoreError::NotFound(baseline.id.clone()))
        );
        assert_eq!(
            store.discard(&baseline.id).await,
            Err(SessionStoreError::NotFound(baseline.id))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline(baseline: Receipt) {
        let mut store = InMemorySessionStore::new();
        store.toggle_offline();
        assert_eq!(
            store.start(baseline).await,
            Err(SessionStoreError::Backend("Session store offline".into()))
        );
    }
}
