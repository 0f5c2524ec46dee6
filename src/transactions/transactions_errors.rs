use thiserror::Error;

/// Custom error type for transaction-related operations.
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Invalid transaction: {0}")]
    InvalidData(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
