// Scanner stand-in: answers every scan with a fixed receipt or a fixed failure.
//
// Used by tests, and by the binary when no OCR backend is wired in.

use crate::modules::receipts::use_cases::start_receipt::command::ScannedReceipt;
use crate::modules::receipts::use_cases::start_receipt::scanner_port::{
    ReceiptImage, ReceiptScanner, ScanError,
};
use async_trait::async_trait;

pub struct InMemoryReceiptScanner {
    outcome: Result<ScannedReceipt, ScanError>,
}

impl InMemoryReceiptScanner {
    pub fn fixed(scanned: ScannedReceipt) -> Self {
        Self {
            outcome: Ok(scanned),
        }
    }

    pub fn failing(detail: impl Into<String>) -> Self {
        Self {
            outcome: Err(ScanError::new(detail)),
        }
    }
}

#[async_trait]
impl ReceiptScanner for InMemoryReceiptScanner {
    async fn scan(&self, image: &ReceiptImage) -> Result<ScannedReceipt, ScanError> {
        if image.base64.is_empty() {
            return Err(ScanError::new("empty image"));
        }
        self.outcome.clone()
    }
}
