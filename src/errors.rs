//! Core error types for the finance application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from a document store driver, SQLite, etc.) are converted to these types
//! by the storage layer.

use thiserror::Error;

use crate::accounts::AccountError;
use crate::institutions::InstitutionError;
use crate::invoices::InvoiceError;
use crate::transactions::TransactionError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Expected validation failures and missing-reference errors are explicit
/// variants; storage faults are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    #[error("Institution error: {0}")]
    Institution(#[from] InstitutionError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Invoice error: {0}")]
    Invoice(#[from] InvoiceError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised while validating value objects and input models.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}
