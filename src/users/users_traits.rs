//! User repository trait.

use super::users_model::User;
use crate::errors::Result;

/// Trait defining the contract for user lookups.
pub trait UserRepositoryTrait: Send + Sync {
    /// Retrieves a user by its ID.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Returns true if a user with the given ID exists.
    fn exists(&self, user_id: &str) -> Result<bool>;
}
