//! Provider and synchronization service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::sync_model::{ProviderAccountData, ProviderTransactionData};
use crate::accounts::Account;
use crate::errors::Result;
use crate::transactions::MergeOutcome;

/// Trait defining the contract for a financial data provider connector.
///
/// Implementations wrap an aggregator API (Pluggy, Belvo, ...) and translate
/// its payloads into the provider-agnostic models of this crate.
#[async_trait]
pub trait FinancialDataProviderTrait: Send + Sync {
    /// Lists all accounts belonging to one provider item.
    async fn get_accounts_by_item_id(&self, item_id: &str) -> Result<Vec<ProviderAccountData>>;

    /// Lists transactions of a provider account, optionally bounded below.
    async fn get_transactions_by_provider_account_id(
        &self,
        provider_account_id: &str,
        from: Option<NaiveDate>,
    ) -> Result<Vec<ProviderTransactionData>>;
}

/// Trait defining the contract for synchronization operations.
#[async_trait]
pub trait SyncServiceTrait: Send + Sync {
    /// Refreshes one automatic account from its provider snapshot.
    async fn sync_account(&self, account_id: &str) -> Result<Account>;

    /// Pulls provider transactions into one automatic account, idempotently.
    async fn sync_transactions(
        &self,
        account_id: &str,
        from: Option<NaiveDate>,
    ) -> Result<MergeOutcome>;
}
