//! Transactions module - domain models, reconciliation use-cases, and traits.

mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

pub use transactions_errors::TransactionError;
pub use transactions_model::{
    AutomaticTransactionUpdate, InvoiceAmount, MergeOutcome, NewTransaction, Transaction,
    TransactionType, TransactionUpdate,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
