// Port to the OCR collaborator that reads a photographed receipt.

use crate::modules::receipts::use_cases::start_receipt::command::ScannedReceipt;
use async_trait::async_trait;
use thiserror::Error;

const DEFAULT_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptImage {
    pub mime_type: String,
    /// Base64 payload without any data URL prefix.
    pub base64: String,
}

impl ReceiptImage {
    /// Accepts either a bare base64 payload or a `data:<mime>;base64,<payload>` URL.
    pub fn from_encoded(encoded: &str) -> Self {
        let encoded = encoded.trim();
        match encoded
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(','))
        {
            Some((header, payload)) => {
                let mime_type = header.split(';').next().unwrap_or_default();
                Self {
                    mime_type: if mime_type.is_empty() {
                        DEFAULT_MIME_TYPE.to_string()
                    } else {
                        mime_type.to_string()
                    },
                    base64: payload.to_string(),
                }
            }
            None => Self {
                mime_type: DEFAULT_MIME_TYPE.to_string(),
                base64: encoded.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("receipt scan failed: {detail}")]
pub struct ScanError {
    pub detail: String,
}

impl ScanError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[async_trait]
pub trait ReceiptScanner: Send + Sync {
    async fn scan(&self, image: &ReceiptImage) -> Result<ScannedReceipt, ScanError>;
}
