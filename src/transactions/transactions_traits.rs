//! Transaction repository and service traits.

use async_trait::async_trait;

use super::transactions_model::{
    AutomaticTransactionUpdate, InvoiceAmount, MergeOutcome, NewTransaction, Transaction,
    TransactionUpdate,
};
use crate::errors::Result;

/// Trait defining the contract for transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Retrieves a transaction by its ID, soft-deleted records included.
    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction>;

    /// Returns true if a non-deleted transaction with the given ID exists.
    fn exists(&self, transaction_id: &str) -> Result<bool>;

    /// Persists a validated transaction.
    async fn create(&self, transaction: Transaction) -> Result<Transaction>;

    /// Soft-deletes a transaction: the record is retained with its
    /// `is_deleted` flag set. Returns the flagged record.
    async fn delete(&self, transaction_id: &str) -> Result<Transaction>;

    /// Applies a manual transaction update (description, comment, category).
    async fn update(&self, update: TransactionUpdate) -> Result<Transaction>;

    /// Applies an automatic transaction update (adds the ignored flag).
    async fn update_automatic(&self, update: AutomaticTransactionUpdate) -> Result<Transaction>;

    /// Idempotent upsert keyed by `provider_id`: unknown transactions are
    /// inserted, known ones refreshed in place. Re-merging the same batch
    /// reports zero created rows.
    async fn merge_transactions(&self, transactions: Vec<Transaction>) -> Result<MergeOutcome>;

    /// Sums the non-deleted member transactions of each given invoice,
    /// skipping transactions in any of the excluded categories. Returns one
    /// entry per requested invoice ID, zero when no transactions remain.
    fn calculate_invoices_amount(
        &self,
        invoice_ids: &[String],
        excluded_category_ids: &[String],
    ) -> Result<Vec<InvoiceAmount>>;
}

/// Trait defining the contract for the transaction reconciliation use-cases.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Posts a transaction to a manual account and reconciles balances,
    /// available limit, and invoice amounts.
    async fn add_manual_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Soft-deletes a transaction (manual or automatic account) and reverts
    /// its effect on every aggregate.
    async fn remove_transaction(&self, transaction_id: &str) -> Result<Transaction>;

    /// Updates mutable fields of a manual transaction.
    async fn update_manual_transaction(&self, update: TransactionUpdate) -> Result<Transaction>;

    /// Updates mutable fields of an automatic transaction.
    async fn update_automatic_transaction(
        &self,
        update: AutomaticTransactionUpdate,
    ) -> Result<Transaction>;
}
