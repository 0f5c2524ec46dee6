//! Centavo Core - domain entities, services, and traits.
//!
//! This crate contains the core business logic of a personal finance
//! manager: validated accounts, transactions, and credit card invoices,
//! plus the reconciliation services that keep balances, available credit
//! limits, and invoice amounts consistent. It is database-agnostic and
//! defines repository/provider traits that are implemented by storage
//! and integration adapters.

pub mod accounts;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod institutions;
pub mod invoices;
pub mod money;
pub mod sync;
pub mod transactions;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

// Re-export the money value object used across all modules
pub use money::Amount;
