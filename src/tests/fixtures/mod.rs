pub mod commands;
pub mod operations;
pub mod receipts;
