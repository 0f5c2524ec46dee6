//! Invoice reconciliation service.

use log::debug;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::invoices_model::{CreditCardInvoice, NewCreditCardInvoice};
use super::invoices_strategy::CreditCardInvoiceStrategy;
use super::invoices_traits::{CreditCardInvoiceRepositoryTrait, CreditCardInvoiceServiceTrait};
use crate::accounts::{Account, AccountError, AccountRepositoryTrait};
use crate::categories::{CategoryRepositoryTrait, CARD_PAYMENT_CATEGORY_NAME};
use crate::errors::Result;
use crate::money::Amount;
use crate::transactions::{InvoiceAmount, TransactionRepositoryTrait};

/// Service keeping invoice amounts and the invoice-derived account balance
/// consistent with the transactions on record.
pub struct CreditCardInvoiceService {
    invoice_repository: Arc<dyn CreditCardInvoiceRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    strategy: Arc<dyn CreditCardInvoiceStrategy>,
}

impl CreditCardInvoiceService {
    /// Creates a new CreditCardInvoiceService instance with injected dependencies.
    pub fn new(
        invoice_repository: Arc<dyn CreditCardInvoiceRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        strategy: Arc<dyn CreditCardInvoiceStrategy>,
    ) -> Self {
        Self {
            invoice_repository,
            transaction_repository,
            account_repository,
            category_repository,
            strategy,
        }
    }

    /// Category IDs excluded from invoice debt: payments against the card
    /// settle an invoice, they are not part of it.
    fn excluded_category_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .category_repository
            .find_by_name(CARD_PAYMENT_CATEGORY_NAME)?
            .map(|category| category.id)
            .into_iter()
            .collect())
    }
}

#[async_trait]
impl CreditCardInvoiceServiceTrait for CreditCardInvoiceService {
    async fn find_or_create_invoice(
        &self,
        account: &Account,
        transaction_date: NaiveDate,
    ) -> Result<CreditCardInvoice> {
        let info = account
            .credit_card_info()
            .ok_or_else(|| AccountError::NotCreditCard(account.id.clone()))?;

        let dates = self.strategy.calculate_invoice_dates(
            transaction_date,
            info.close_day(),
            info.due_day(),
        )?;

        if let Some(existing) = self
            .invoice_repository
            .find_by_due_date(&account.id, dates.due_date)?
        {
            return Ok(existing);
        }

        debug!(
            "Opening invoice for account {} closing {} due {}",
            account.id, dates.closing_date, dates.due_date
        );
        let invoice = CreditCardInvoice::try_new(NewCreditCardInvoice {
            id: Some(Uuid::new_v4().to_string()),
            account_id: account.id.clone(),
            close_date: dates.closing_date,
            due_date: dates.due_date,
            amount: Decimal::ZERO,
        })?;
        self.invoice_repository.create(invoice).await
    }

    async fn recalculate_invoices(&self, invoice_ids: &[String]) -> Result<Vec<InvoiceAmount>> {
        if invoice_ids.is_empty() {
            return Ok(Vec::new());
        }

        let excluded = self.excluded_category_ids()?;
        let amounts = self
            .transaction_repository
            .calculate_invoices_amount(invoice_ids, &excluded)?;

        for entry in &amounts {
            self.invoice_repository
                .update_amount(&entry.invoice_id, Amount::new(entry.amount)?)
                .await?;
        }
        Ok(amounts)
    }

    async fn refresh_account_balance(
        &self,
        account_id: &str,
        reference_date: NaiveDate,
    ) -> Result<Amount> {
        let balance = self
            .invoice_repository
            .get_last_closed_invoice(account_id, reference_date)?
            .map(|invoice| invoice.amount)
            .unwrap_or_else(Amount::zero);

        self.account_repository
            .update_balance(account_id, balance)
            .await?;
        Ok(balance)
    }
}
