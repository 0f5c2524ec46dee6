//! Data shapes returned by financial data providers.
//!
//! These mirror what Open Finance aggregators expose, already normalized to
//! the provider-agnostic vocabulary of this crate. Monetary values arrive as
//! decimals and are validated into [`Amount`](crate::money::Amount) at the
//! point they enter the domain.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::AccountType;

/// Credit card parameters as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCreditData {
    pub brand: String,
    pub credit_limit: Decimal,
    pub available_credit_limit: Decimal,
    pub close_day: u32,
    pub due_day: u32,
}

/// Snapshot of one account inside a provider item (a bank connection).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAccountData {
    pub provider_account_id: String,
    pub provider_item_id: String,
    pub name: String,
    pub account_type: AccountType,
    pub balance: Decimal,
    pub currency: String,
    pub credit_data: Option<ProviderCreditData>,
}

/// One transaction as reported by the provider for an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderTransactionData {
    /// Stable identifier on the provider side; merge key for idempotency.
    pub provider_id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category_id: Option<String>,
}
