//! Account domain models.
//!
//! Accounts are a sum type over capability (wallet, bank, credit card) and
//! sync lifecycle (manual, automatic). Construction goes through
//! [`Account::try_new`], which enforces the validation order shared by all
//! variants; the capability methods [`Account::add_transaction`] and
//! [`Account::remove_transaction`] are the only mutators of the running
//! aggregates.

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accounts_errors::AccountError;
use crate::constants::{MAX_BILLING_DAY, MIN_BILLING_DAY};
use crate::errors::Result;
use crate::institutions::{Institution, InstitutionError};
use crate::money::Amount;

/// Account capability class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Wallet,
    Bank,
    CreditCard,
}

/// How the account's data enters the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncType {
    /// The user records transactions by hand.
    Manual,
    /// Transactions and balances arrive from a financial data provider.
    Automatic,
}

/// Provider synchronization state of an automatic account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncStatus {
    Updated,
    Updating,
    Outdated,
    LoginError,
}

/// Synchronization bookkeeping carried by automatic accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synchronization {
    /// Identifier of the provider item (connection) this account came from.
    pub provider_item_id: String,
    pub created_at: NaiveDateTime,
    pub status: SyncStatus,
    pub last_sync_at: Option<NaiveDateTime>,
}

/// Credit card billing parameters.
///
/// Fields are private: the batch-validated [`CreditCardInfo::try_new`] is the
/// only construction path, and the available limit only moves through the
/// add/subtract mutators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardInfo {
    brand: String,
    credit_limit: Amount,
    available_credit_limit: Amount,
    close_day: u32,
    due_day: u32,
}

/// Input model for credit card parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCreditCardInfo {
    pub brand: String,
    pub credit_limit: Decimal,
    pub available_credit_limit: Decimal,
    pub close_day: u32,
    pub due_day: u32,
}

impl CreditCardInfo {
    /// Validates every field independently and reports all failures at once.
    ///
    /// Unlike the fail-fast account validation, the error lists the name of
    /// each invalid field: `"Invalid credit card params: brand, closeDay"`.
    pub fn try_new(input: NewCreditCardInfo) -> Result<Self> {
        let mut invalid: Vec<&str> = Vec::new();

        if input.brand.trim().is_empty() {
            invalid.push("brand");
        }
        if !(MIN_BILLING_DAY..=MAX_BILLING_DAY).contains(&input.close_day) {
            invalid.push("closeDay");
        }
        if !(MIN_BILLING_DAY..=MAX_BILLING_DAY).contains(&input.due_day) {
            invalid.push("dueDay");
        }
        let credit_limit = match Amount::new(input.credit_limit) {
            Ok(amount) if !amount.is_negative() => Some(amount),
            _ => {
                invalid.push("creditLimit");
                None
            }
        };
        let available_credit_limit = match Amount::new(input.available_credit_limit) {
            Ok(amount) => Some(amount),
            Err(_) => {
                invalid.push("availableCreditLimit");
                None
            }
        };

        match (credit_limit, available_credit_limit) {
            (Some(credit_limit), Some(available_credit_limit)) if invalid.is_empty() => Ok(Self {
                brand: input.brand,
                credit_limit,
                available_credit_limit,
                close_day: input.close_day,
                due_day: input.due_day,
            }),
            _ => Err(AccountError::InvalidCreditCard(invalid.join(", ")).into()),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn credit_limit(&self) -> Amount {
        self.credit_limit
    }

    pub fn available_credit_limit(&self) -> Amount {
        self.available_credit_limit
    }

    pub fn close_day(&self) -> u32 {
        self.close_day
    }

    pub fn due_day(&self) -> u32 {
        self.due_day
    }

    /// Adjusts the available limit by a transaction amount. Expenses carry a
    /// negative amount, so adding one reduces the available limit.
    pub fn add_to_available_limit(&mut self, delta: Decimal) -> Result<()> {
        self.available_credit_limit = self.available_credit_limit.add(delta)?;
        Ok(())
    }

    /// Inverse of [`CreditCardInfo::add_to_available_limit`].
    pub fn subtract_from_available_limit(&mut self, delta: Decimal) -> Result<()> {
        self.available_credit_limit = self.available_credit_limit.subtract(delta)?;
        Ok(())
    }
}

/// Capability-specific account data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all_fields = "camelCase")]
pub enum AccountKind {
    Wallet,
    Bank {
        institution: Option<Institution>,
    },
    CreditCard {
        institution: Option<Institution>,
        credit_card_info: CreditCardInfo,
    },
}

/// Sync-lifecycle-specific account data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "syncType", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all_fields = "camelCase")]
pub enum AccountSync {
    Manual,
    Automatic {
        /// Identifier of this account inside the provider item.
        provider_account_id: String,
        synchronization: Synchronization,
    },
}

/// Domain model representing an account in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub balance: Amount,
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub kind: AccountKind,
    #[serde(flatten)]
    pub sync: AccountSync,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub balance: Decimal,
    pub image_url: Option<String>,
    pub account_type: AccountType,
    pub sync_type: SyncType,
    pub institution: Option<Institution>,
    pub credit_card_info: Option<NewCreditCardInfo>,
    // Automatic-sync fields, required when sync_type is AUTOMATIC.
    pub provider_account_id: Option<String>,
    pub provider_item_id: Option<String>,
    pub provider_created_at: Option<NaiveDateTime>,
    pub sync_status: Option<SyncStatus>,
}

impl Account {
    /// Builds a validated account from the input model.
    ///
    /// Validation is fail-fast, in a fixed order shared by every variant:
    /// name, balance, credit card info (credit cards only), institution
    /// (required for automatic bank/credit-card accounts), then the
    /// automatic-sync fields one by one.
    pub fn try_new(new: NewAccount) -> Result<Self> {
        if new.name.trim().is_empty() {
            return Err(AccountError::InvalidName("account name cannot be empty".to_string()).into());
        }

        let balance = Amount::new(new.balance).map_err(|_| {
            AccountError::InvalidBalance(format!(
                "'{}' is not an integer number of cents",
                new.balance
            ))
        })?;

        let kind = match new.account_type {
            AccountType::Wallet => AccountKind::Wallet,
            AccountType::Bank => AccountKind::Bank {
                institution: new.institution.clone(),
            },
            AccountType::CreditCard => {
                let info = new
                    .credit_card_info
                    .clone()
                    .ok_or_else(|| AccountError::MissingField("creditCardInfo".to_string()))?;
                AccountKind::CreditCard {
                    institution: new.institution.clone(),
                    credit_card_info: CreditCardInfo::try_new(info)?,
                }
            }
        };

        if new.sync_type == SyncType::Automatic
            && matches!(new.account_type, AccountType::Bank | AccountType::CreditCard)
            && new.institution.is_none()
        {
            return Err(InstitutionError::Invalid(
                "institution is required for automatic accounts".to_string(),
            )
            .into());
        }

        let sync = match new.sync_type {
            SyncType::Manual => AccountSync::Manual,
            SyncType::Automatic => {
                let provider_account_id = new
                    .provider_account_id
                    .ok_or_else(|| AccountError::MissingField("providerAccountId".to_string()))?;
                let provider_item_id = new
                    .provider_item_id
                    .ok_or_else(|| AccountError::MissingField("providerItemId".to_string()))?;
                let created_at = new
                    .provider_created_at
                    .ok_or_else(|| AccountError::MissingField("createdAt".to_string()))?;
                let status = new
                    .sync_status
                    .ok_or_else(|| AccountError::MissingField("syncStatus".to_string()))?;
                AccountSync::Automatic {
                    provider_account_id,
                    synchronization: Synchronization {
                        provider_item_id,
                        created_at,
                        status,
                        last_sync_at: None,
                    },
                }
            }
        };

        let now = Utc::now().naive_utc();
        Ok(Account {
            id: new.id.unwrap_or_default(),
            user_id: new.user_id,
            name: new.name,
            balance,
            image_url: new.image_url,
            kind,
            sync,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn account_type(&self) -> AccountType {
        match self.kind {
            AccountKind::Wallet => AccountType::Wallet,
            AccountKind::Bank { .. } => AccountType::Bank,
            AccountKind::CreditCard { .. } => AccountType::CreditCard,
        }
    }

    pub fn sync_type(&self) -> SyncType {
        match self.sync {
            AccountSync::Manual => SyncType::Manual,
            AccountSync::Automatic { .. } => SyncType::Automatic,
        }
    }

    pub fn institution(&self) -> Option<&Institution> {
        match &self.kind {
            AccountKind::Wallet => None,
            AccountKind::Bank { institution } => institution.as_ref(),
            AccountKind::CreditCard { institution, .. } => institution.as_ref(),
        }
    }

    pub fn credit_card_info(&self) -> Option<&CreditCardInfo> {
        match &self.kind {
            AccountKind::CreditCard {
                credit_card_info, ..
            } => Some(credit_card_info),
            _ => None,
        }
    }

    /// Applies a transaction to the account's running aggregates.
    ///
    /// Wallet and bank balances track transactions directly. A credit card
    /// only moves its available limit here; its balance follows the last
    /// closed invoice and is refreshed by the reconciliation services.
    pub fn add_transaction(&mut self, amount: Amount) -> Result<()> {
        match &mut self.kind {
            AccountKind::Wallet | AccountKind::Bank { .. } => {
                self.balance = self.balance.add(amount.as_decimal())?;
            }
            AccountKind::CreditCard {
                credit_card_info, ..
            } => {
                credit_card_info.add_to_available_limit(amount.as_decimal())?;
            }
        }
        Ok(())
    }

    /// Reverts a transaction's effect on the running aggregates. Exact
    /// inverse of [`Account::add_transaction`].
    pub fn remove_transaction(&mut self, amount: Amount) -> Result<()> {
        match &mut self.kind {
            AccountKind::Wallet | AccountKind::Bank { .. } => {
                self.balance = self.balance.subtract(amount.as_decimal())?;
            }
            AccountKind::CreditCard {
                credit_card_info, ..
            } => {
                credit_card_info.subtract_from_available_limit(amount.as_decimal())?;
            }
        }
        Ok(())
    }
}
