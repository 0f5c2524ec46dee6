//! Synchronization of automatic accounts against their provider.
//!
//! Account sync replaces provider-authoritative aggregates (balance, credit
//! card parameters) with the provider snapshot. Transaction sync merges the
//! provider feed idempotently on the provider id: a re-run updates existing
//! rows instead of inserting duplicates, and only newly inserted rows move
//! the available credit limit.

use log::{debug, warn};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::sync_model::ProviderTransactionData;
use super::sync_traits::{FinancialDataProviderTrait, SyncServiceTrait};
use crate::accounts::{
    Account, AccountError, AccountRepositoryTrait, AccountSync, AccountType, CreditCardInfo,
    NewCreditCardInfo, SyncStatus,
};
use crate::errors::{Error, Result};
use crate::invoices::CreditCardInvoiceServiceTrait;
use crate::money::Amount;
use crate::transactions::{
    MergeOutcome, NewTransaction, Transaction, TransactionRepositoryTrait,
};

/// Service orchestrating provider synchronization runs.
pub struct SyncService {
    provider: Arc<dyn FinancialDataProviderTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    invoice_service: Arc<dyn CreditCardInvoiceServiceTrait>,
}

impl SyncService {
    /// Creates a new SyncService instance with injected dependencies.
    pub fn new(
        provider: Arc<dyn FinancialDataProviderTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        invoice_service: Arc<dyn CreditCardInvoiceServiceTrait>,
    ) -> Self {
        Self {
            provider,
            account_repository,
            transaction_repository,
            invoice_service,
        }
    }

    fn provider_identifiers(account: &Account) -> Result<(String, String)> {
        match &account.sync {
            AccountSync::Automatic {
                provider_account_id,
                synchronization,
            } => Ok((
                provider_account_id.clone(),
                synchronization.provider_item_id.clone(),
            )),
            AccountSync::Manual => Err(AccountError::WrongSyncType("manual".to_string()).into()),
        }
    }

    fn build_transaction(account: &Account, data: &ProviderTransactionData) -> Result<Transaction> {
        NewTransaction {
            id: Some(Uuid::new_v4().to_string()),
            account_id: account.id.clone(),
            user_id: account.user_id.clone(),
            amount: data.amount,
            date: data.date,
            description: None,
            description_original: Some(data.description.clone()),
            category_id: data.category_id.clone(),
            comment: None,
            provider_id: Some(data.provider_id.clone()),
        }
        .into_transaction()
    }

    async fn stamp_synchronized(&self, account_id: &str) -> Result<()> {
        self.account_repository
            .update_synchronization_status(account_id, SyncStatus::Updated, Utc::now().naive_utc())
            .await
    }
}

#[async_trait]
impl SyncServiceTrait for SyncService {
    async fn sync_account(&self, account_id: &str) -> Result<Account> {
        let account = self.account_repository.get_by_id(account_id)?;
        let (provider_account_id, provider_item_id) = Self::provider_identifiers(&account)?;

        let snapshot = self
            .provider
            .get_accounts_by_item_id(&provider_item_id)
            .await?
            .into_iter()
            .find(|data| data.provider_account_id == provider_account_id)
            .ok_or_else(|| {
                Error::Unexpected(format!(
                    "provider item '{}' is missing account '{}'",
                    provider_item_id, provider_account_id
                ))
            })?;

        if account.account_type() == AccountType::CreditCard {
            let credit_data = snapshot.credit_data.ok_or_else(|| {
                Error::Provider(format!(
                    "provider account '{}' has no credit data",
                    provider_account_id
                ))
            })?;
            let credit_card_info = CreditCardInfo::try_new(NewCreditCardInfo {
                brand: credit_data.brand,
                credit_limit: credit_data.credit_limit,
                available_credit_limit: credit_data.available_credit_limit,
                close_day: credit_data.close_day,
                due_day: credit_data.due_day,
            })?;
            self.account_repository
                .update_credit_card_info(account_id, credit_card_info)
                .await?;
        } else {
            self.account_repository
                .update_balance(account_id, Amount::new(snapshot.balance)?)
                .await?;
        }

        self.stamp_synchronized(account_id).await?;
        debug!("Synchronized account {} from provider snapshot", account_id);
        self.account_repository.get_by_id(account_id)
    }

    async fn sync_transactions(
        &self,
        account_id: &str,
        from: Option<NaiveDate>,
    ) -> Result<MergeOutcome> {
        let mut account = self.account_repository.get_by_id(account_id)?;
        let (provider_account_id, _) = Self::provider_identifiers(&account)?;

        let feed = self
            .provider
            .get_transactions_by_provider_account_id(&provider_account_id, from)
            .await?;

        let is_credit_card = account.account_type() == AccountType::CreditCard;
        let mut transactions = Vec::with_capacity(feed.len());
        let mut invoice_ids: Vec<String> = Vec::new();
        for data in &feed {
            let mut transaction = match Self::build_transaction(&account, data) {
                Ok(transaction) => transaction,
                Err(err) => {
                    warn!(
                        "Skipping provider transaction '{}': {}",
                        data.provider_id, err
                    );
                    continue;
                }
            };
            if is_credit_card {
                let invoice = self
                    .invoice_service
                    .find_or_create_invoice(&account, transaction.date)
                    .await?;
                transaction.invoice_id = Some(invoice.id.clone());
                transaction.invoice_date = Some(invoice.due_date);
                if !invoice_ids.contains(&invoice.id) {
                    invoice_ids.push(invoice.id);
                }
            }
            transactions.push(transaction);
        }

        let outcome = self
            .transaction_repository
            .merge_transactions(transactions)
            .await?;
        debug!(
            "Merged provider feed into account {}: {} created, {} updated",
            account_id,
            outcome.created.len(),
            outcome.updated
        );

        if is_credit_card {
            self.invoice_service
                .recalculate_invoices(&invoice_ids)
                .await?;
            // Only rows the merge actually inserted consume limit; re-runs
            // of the same feed must not move it again.
            for transaction in &outcome.created {
                account.add_transaction(transaction.amount)?;
            }
            if let Some(info) = account.credit_card_info() {
                self.account_repository
                    .update_available_credit_limit(account_id, info.available_credit_limit())
                    .await?;
            }
            self.invoice_service
                .refresh_account_balance(account_id, Utc::now().date_naive())
                .await?;
        }

        self.stamp_synchronized(account_id).await?;
        Ok(outcome)
    }
}
