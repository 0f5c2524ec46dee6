use thiserror::Error;

/// Custom error type for account-related operations.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid balance: {0}")]
    InvalidBalance(String),

    /// Batch validation failure for credit card parameters. The payload is
    /// the comma-separated list of every invalid field name.
    #[error("Invalid credit card params: {0}")]
    InvalidCreditCard(String),

    #[error("Required account field '{0}' is missing")]
    MissingField(String),

    #[error("Account '{0}' is not a credit card account")]
    NotCreditCard(String),

    #[error("Operation not supported for {0} accounts")]
    WrongSyncType(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
