//! Transaction reconciliation use-cases.
//!
//! Adding, removing, or updating a transaction must keep three aggregates
//! consistent: the account balance, the available credit limit, and the
//! amount of the invoice the transaction bills to. Wallet and bank accounts
//! only move their balance; credit card accounts move the available limit
//! per transaction while their balance tracks the last closed invoice.

use log::debug;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::transactions_model::{
    AutomaticTransactionUpdate, NewTransaction, Transaction, TransactionUpdate,
};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::accounts::{Account, AccountError, AccountRepositoryTrait, AccountType, SyncType};
use crate::categories::{is_card_payment_category, CategoryRepositoryTrait};
use crate::errors::{Error, Result};
use crate::invoices::CreditCardInvoiceServiceTrait;
use crate::users::UserRepositoryTrait;

/// Service for posting, removing, and updating transactions.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    invoice_service: Arc<dyn CreditCardInvoiceServiceTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance with injected dependencies.
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        invoice_service: Arc<dyn CreditCardInvoiceServiceTrait>,
    ) -> Self {
        Self {
            transaction_repository,
            account_repository,
            category_repository,
            user_repository,
            invoice_service,
        }
    }

    fn check_category(&self, category_id: Option<&str>) -> Result<()> {
        if let Some(category_id) = category_id {
            if !self.category_repository.exists(category_id)? {
                return Err(Error::NotFound(format!(
                    "Category '{}' is not registered",
                    category_id
                )));
            }
        }
        Ok(())
    }

    fn is_card_payment(&self, category_id: Option<&str>) -> Result<bool> {
        match category_id {
            Some(category_id) => {
                let category = self.category_repository.get_by_id(category_id)?;
                Ok(is_card_payment_category(&category.name))
            }
            None => Ok(false),
        }
    }

    /// A category change crosses the card-payment boundary when exactly one
    /// side of the transition is the card-payment category. The invoice
    /// amount changes in that case even though amount and date do not.
    fn crosses_card_payment_boundary(
        &self,
        current: &Transaction,
        new_category_id: Option<&str>,
    ) -> Result<bool> {
        let Some(new_category_id) = new_category_id else {
            return Ok(false);
        };
        let before = self.is_card_payment(current.category_id.as_deref())?;
        let after = self.is_card_payment(Some(new_category_id))?;
        Ok(before != after)
    }

    /// Re-runs the invoice aggregation and the balance refresh for the
    /// invoice a transaction bills to, if any.
    async fn reconcile_invoice(&self, account_id: &str, invoice_id: Option<&str>) -> Result<()> {
        if let Some(invoice_id) = invoice_id {
            self.invoice_service
                .recalculate_invoices(&[invoice_id.to_string()])
                .await?;
            self.invoice_service
                .refresh_account_balance(account_id, Utc::now().date_naive())
                .await?;
        }
        Ok(())
    }

    /// Persists the aggregate moved by [`Account::add_transaction`] /
    /// [`Account::remove_transaction`] and, for credit cards, refreshes the
    /// invoice-derived balance.
    async fn persist_account_aggregates(&self, account: &Account) -> Result<()> {
        match account.credit_card_info() {
            Some(info) => {
                self.account_repository
                    .update_available_credit_limit(&account.id, info.available_credit_limit())
                    .await?;
                self.invoice_service
                    .refresh_account_balance(&account.id, Utc::now().date_naive())
                    .await?;
            }
            None => {
                self.account_repository
                    .update_balance(&account.id, account.balance)
                    .await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn add_manual_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;

        if !self.user_repository.exists(&new_transaction.user_id)? {
            return Err(Error::NotFound(format!(
                "User '{}' is not registered",
                new_transaction.user_id
            )));
        }
        let mut account = self
            .account_repository
            .get_by_id(&new_transaction.account_id)?;
        if account.sync_type() != SyncType::Manual {
            return Err(AccountError::WrongSyncType("automatic".to_string()).into());
        }
        self.check_category(new_transaction.category_id.as_deref())?;

        let mut transaction = new_transaction.into_transaction()?;
        if transaction.id.is_empty() {
            transaction.id = Uuid::new_v4().to_string();
        }

        debug!(
            "Adding {:?} transaction of {} to account {}",
            transaction.transaction_type, transaction.amount, account.id
        );

        if account.account_type() == AccountType::CreditCard {
            let invoice = self
                .invoice_service
                .find_or_create_invoice(&account, transaction.date)
                .await?;
            transaction.invoice_id = Some(invoice.id.clone());
            transaction.invoice_date = Some(invoice.due_date);

            let transaction = self.transaction_repository.create(transaction).await?;
            self.invoice_service
                .recalculate_invoices(&[invoice.id])
                .await?;
            account.add_transaction(transaction.amount)?;
            self.persist_account_aggregates(&account).await?;
            Ok(transaction)
        } else {
            let transaction = self.transaction_repository.create(transaction).await?;
            account.add_transaction(transaction.amount)?;
            self.persist_account_aggregates(&account).await?;
            Ok(transaction)
        }
    }

    async fn remove_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        let transaction = self.transaction_repository.get_by_id(transaction_id)?;
        if transaction.is_deleted {
            return Err(super::TransactionError::NotFound(transaction_id.to_string()).into());
        }
        let mut account = self.account_repository.get_by_id(&transaction.account_id)?;

        let deleted = self.transaction_repository.delete(transaction_id).await?;
        debug!(
            "Removed transaction {} from account {}",
            deleted.id, account.id
        );

        if account.account_type() == AccountType::CreditCard {
            if let Some(invoice_id) = deleted.invoice_id.clone() {
                self.invoice_service
                    .recalculate_invoices(&[invoice_id])
                    .await?;
            }
            account.remove_transaction(deleted.amount)?;
            self.persist_account_aggregates(&account).await?;
        } else {
            account.remove_transaction(deleted.amount)?;
            self.persist_account_aggregates(&account).await?;
        }
        Ok(deleted)
    }

    async fn update_manual_transaction(&self, update: TransactionUpdate) -> Result<Transaction> {
        let current = self.transaction_repository.get_by_id(&update.id)?;
        let account = self.account_repository.get_by_id(&current.account_id)?;
        if account.sync_type() != SyncType::Manual {
            return Err(AccountError::WrongSyncType("automatic".to_string()).into());
        }

        self.check_category(update.category_id.as_deref())?;
        let crosses =
            self.crosses_card_payment_boundary(&current, update.category_id.as_deref())?;

        let updated = self.transaction_repository.update(update).await?;
        if crosses {
            self.reconcile_invoice(&account.id, updated.invoice_id.as_deref())
                .await?;
        }
        Ok(updated)
    }

    async fn update_automatic_transaction(
        &self,
        update: AutomaticTransactionUpdate,
    ) -> Result<Transaction> {
        let current = self.transaction_repository.get_by_id(&update.id)?;
        let account = self.account_repository.get_by_id(&current.account_id)?;
        if account.sync_type() != SyncType::Automatic {
            return Err(AccountError::WrongSyncType("manual".to_string()).into());
        }

        self.check_category(update.category_id.as_deref())?;
        let crosses =
            self.crosses_card_payment_boundary(&current, update.category_id.as_deref())?;

        let updated = self.transaction_repository.update_automatic(update).await?;
        if crosses {
            self.reconcile_invoice(&account.id, updated.invoice_id.as_deref())
                .await?;
        }
        Ok(updated)
    }
}
