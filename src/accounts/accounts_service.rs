//! Account creation and lookup use-cases.

use log::debug;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::accounts_model::{Account, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::{Error, Result};
use crate::institutions::InstitutionRepositoryTrait;
use crate::users::UserRepositoryTrait;

/// Service for managing accounts.
pub struct AccountService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    institution_repository: Arc<dyn InstitutionRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance with injected dependencies.
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        institution_repository: Arc<dyn InstitutionRepositoryTrait>,
    ) -> Self {
        Self {
            account_repository,
            user_repository,
            institution_repository,
        }
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    /// Creates a new account after checking every referenced entity.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        if !self.user_repository.exists(&new_account.user_id)? {
            return Err(Error::NotFound(format!(
                "User '{}' is not registered",
                new_account.user_id
            )));
        }

        if let Some(institution) = &new_account.institution {
            if !self.institution_repository.exists(&institution.id)? {
                return Err(Error::NotFound(format!(
                    "Institution '{}' is not registered",
                    institution.id
                )));
            }
        }

        let mut account = Account::try_new(new_account)?;
        if account.id.is_empty() {
            account.id = Uuid::new_v4().to_string();
        }

        debug!(
            "Creating {:?} {:?} account '{}'",
            account.sync_type(),
            account.account_type(),
            account.name
        );
        self.account_repository.create(account).await
    }

    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.account_repository.get_by_id(account_id)
    }
}
