//! Accounts module - domain models, services, and traits.

mod accounts_errors;
mod accounts_model;
mod accounts_service;
mod accounts_traits;

pub use accounts_errors::AccountError;
pub use accounts_model::{
    Account, AccountKind, AccountSync, AccountType, CreditCardInfo, NewAccount, NewCreditCardInfo,
    SyncStatus, SyncType, Synchronization,
};
pub use accounts_service::AccountService;
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
