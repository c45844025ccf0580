// Shared receipt fixtures, loaded from the JSON files next to this module.

use crate::modules::receipts::core::receipt::Receipt;
use crate::modules::receipts::use_cases::start_receipt::command::ScannedReceipt;
use std::fs;

pub fn make_baseline_receipt() -> Receipt {
    let json_str = fs::read_to_string("./src/tests/fixtures/json/baseline_receipt.json").unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub fn make_scanned_receipt() -> ScannedReceipt {
    let json_str = fs::read_to_string("./src/tests/fixtures/json/scanned_receipt.json").unwrap();
    serde_json::from_str(&json_str).unwrap()
}

#[cfg(test)]
mod receipt_fixtures_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_load_the_baseline_receipt() {
        let receipt = make_baseline_receipt();
        assert_eq!(receipt.id, "r-fixed-0001");
        assert_eq!(receipt.items.len(), 4);
        assert!(receipt.items.iter().any(|i| i.is_tax()));
    }

    #[rstest]
    fn it_should_load_the_scanned_receipt() {
        let scanned = make_scanned_receipt();
        assert_eq!(scanned.items.len(), 2);
        assert_eq!(scanned.items[0].unit_price, 300);
        assert_eq!(scanned.items[1].quantity, 2);
        assert_eq!((scanned.tax, scanned.tip), (45, 100));
    }
}
