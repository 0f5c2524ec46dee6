use thiserror::Error;

/// Custom error type for invoice-related operations.
#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("Invalid invoice dates: {0}")]
    InvalidDates(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
