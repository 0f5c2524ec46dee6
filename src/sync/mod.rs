//! Sync module - provider-driven refresh of automatic accounts.

mod sync_model;
mod sync_service;
mod sync_traits;

pub use sync_model::{ProviderAccountData, ProviderCreditData, ProviderTransactionData};
pub use sync_service::SyncService;
pub use sync_traits::{FinancialDataProviderTrait, SyncServiceTrait};
