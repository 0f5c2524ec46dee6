//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::accounts_model::{Account, CreditCardInfo, NewAccount, SyncStatus};
use crate::errors::Result;
use crate::money::Amount;

/// Trait defining the contract for account repository operations.
///
/// Accounts are never physically deleted; deactivation is a soft flag
/// handled by the storage layer.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Persists a validated account.
    async fn create(&self, account: Account) -> Result<Account>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Returns true if an account with the given ID exists.
    fn exists(&self, account_id: &str) -> Result<bool>;

    /// Overwrites the account balance.
    async fn update_balance(&self, account_id: &str, balance: Amount) -> Result<()>;

    /// Overwrites the available credit limit of a credit card account.
    async fn update_available_credit_limit(
        &self,
        account_id: &str,
        available_credit_limit: Amount,
    ) -> Result<()>;

    /// Overwrites the full credit card parameter set.
    async fn update_credit_card_info(
        &self,
        account_id: &str,
        credit_card_info: CreditCardInfo,
    ) -> Result<()>;

    /// Records the outcome of a provider synchronization run.
    async fn update_synchronization_status(
        &self,
        account_id: &str,
        status: SyncStatus,
        last_sync_at: NaiveDateTime,
    ) -> Result<()>;
}

/// Trait defining the contract for account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;
}
