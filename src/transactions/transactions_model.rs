//! Transaction domain models.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transactions_errors::TransactionError;
use crate::errors::Result;
use crate::money::Amount;

/// Direction of a transaction, derived from the sign of its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Non-negative amounts are income, negative amounts expenses.
    pub fn from_amount(amount: Amount) -> Self {
        if amount.is_negative() {
            TransactionType::Expense
        } else {
            TransactionType::Income
        }
    }
}

/// Domain model representing a posted transaction.
///
/// Amount and date are immutable once posted; the update use-cases only
/// touch description, comment, category, and the ignored flag. Removal is a
/// soft delete: the record stays, `is_deleted` flips.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub user_id: String,
    pub amount: Amount,
    pub transaction_type: TransactionType,
    /// Purchase/posting date, day granularity, UTC.
    pub date: NaiveDate,
    pub description: Option<String>,
    /// Description as delivered by the data provider, automatic accounts only.
    pub description_original: Option<String>,
    pub category_id: Option<String>,
    pub comment: Option<String>,
    /// Excluded from spending reports when set; aggregates still apply.
    pub ignored: bool,
    pub is_deleted: bool,
    /// Invoice this transaction is billed on, credit card accounts only.
    pub invoice_id: Option<String>,
    /// Due date of that invoice, kept denormalized for cycle queries.
    pub invoice_date: Option<NaiveDate>,
    /// Transaction ID in the provider's system, the merge dedupe key.
    pub provider_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for posting a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub user_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub description_original: Option<String>,
    pub category_id: Option<String>,
    pub comment: Option<String>,
    pub provider_id: Option<String>,
}

impl NewTransaction {
    /// Validates the new transaction data.
    pub fn validate(&self) -> Result<()> {
        if self.amount.is_zero() {
            return Err(TransactionError::InvalidData("amount must not be zero".to_string()).into());
        }
        let has_description = self
            .description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty());
        let has_original = self
            .description_original
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty());
        if !has_description && !has_original {
            return Err(
                TransactionError::InvalidData("description is required".to_string()).into(),
            );
        }
        Ok(())
    }

    /// Builds the validated domain transaction.
    ///
    /// Invoice assignment fields stay empty here; the credit card
    /// reconciliation path fills them before persisting.
    pub fn into_transaction(self) -> Result<Transaction> {
        self.validate()?;
        let amount = Amount::new(self.amount)?;
        let now = Utc::now().naive_utc();
        Ok(Transaction {
            id: self.id.unwrap_or_default(),
            account_id: self.account_id,
            user_id: self.user_id,
            amount,
            transaction_type: TransactionType::from_amount(amount),
            date: self.date,
            description: self.description,
            description_original: self.description_original,
            category_id: self.category_id,
            comment: self.comment,
            ignored: false,
            is_deleted: false,
            invoice_id: None,
            invoice_date: None,
            provider_id: self.provider_id,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Input model for updating a manual transaction.
///
/// Amount and date are deliberately absent; posted values never change.
/// `None` leaves a field untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub category_id: Option<String>,
}

/// Input model for updating an automatic transaction.
///
/// Same shape as [`TransactionUpdate`] plus the ignored flag, which only
/// makes sense for provider-sourced records the user cannot delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomaticTransactionUpdate {
    pub id: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub category_id: Option<String>,
    pub ignored: Option<bool>,
}

/// Recomputed amount of one invoice, as returned by the aggregation query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceAmount {
    pub invoice_id: String,
    pub amount: Decimal,
}

/// Result of an idempotent provider-transaction merge.
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    /// Transactions inserted for the first time by this merge.
    pub created: Vec<Transaction>,
    /// Number of already-known provider transactions refreshed in place.
    pub updated: usize,
}
