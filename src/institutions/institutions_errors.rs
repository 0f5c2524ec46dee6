use thiserror::Error;

/// Custom error type for institution-related operations.
#[derive(Debug, Error)]
pub enum InstitutionError {
    #[error("Invalid institution: {0}")]
    Invalid(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
