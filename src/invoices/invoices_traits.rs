//! Invoice repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::invoices_model::CreditCardInvoice;
use crate::accounts::Account;
use crate::errors::Result;
use crate::money::Amount;
use crate::transactions::InvoiceAmount;

/// Trait defining the contract for credit card invoice persistence.
#[async_trait]
pub trait CreditCardInvoiceRepositoryTrait: Send + Sync {
    /// Persists a validated invoice.
    async fn create(&self, invoice: CreditCardInvoice) -> Result<CreditCardInvoice>;

    /// Retrieves an invoice by its ID.
    fn get_by_id(&self, invoice_id: &str) -> Result<CreditCardInvoice>;

    /// Returns true if an invoice with the given ID exists.
    fn exists(&self, invoice_id: &str) -> Result<bool>;

    /// Finds the account's invoice with the given due date, if any.
    fn find_by_due_date(
        &self,
        account_id: &str,
        due_date: NaiveDate,
    ) -> Result<Option<CreditCardInvoice>>;

    /// Returns the account's most recent invoice whose closing date is on or
    /// before `reference_date`. Ties on the closing date break by invoice ID,
    /// descending; every adapter must apply the same ordering.
    fn get_last_closed_invoice(
        &self,
        account_id: &str,
        reference_date: NaiveDate,
    ) -> Result<Option<CreditCardInvoice>>;

    /// Overwrites the invoice amount.
    async fn update_amount(&self, invoice_id: &str, amount: Amount) -> Result<()>;
}

/// Trait defining the contract for the invoice reconciliation service.
#[async_trait]
pub trait CreditCardInvoiceServiceTrait: Send + Sync {
    /// Resolves the invoice a transaction on `transaction_date` bills to,
    /// creating it with a zero amount when the cycle has no invoice yet.
    async fn find_or_create_invoice(
        &self,
        account: &Account,
        transaction_date: NaiveDate,
    ) -> Result<CreditCardInvoice>;

    /// Recomputes and persists the amount of each given invoice from its
    /// surviving member transactions, card payments excluded.
    async fn recalculate_invoices(&self, invoice_ids: &[String]) -> Result<Vec<InvoiceAmount>>;

    /// Sets the account balance to the amount of its last closed invoice
    /// (zero when none is closed yet) and returns the new balance.
    async fn refresh_account_balance(
        &self,
        account_id: &str,
        reference_date: NaiveDate,
    ) -> Result<Amount>;
}
