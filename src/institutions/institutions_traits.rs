//! Institution repository trait.

use super::institutions_model::Institution;
use crate::errors::Result;

/// Trait defining the contract for institution lookups.
pub trait InstitutionRepositoryTrait: Send + Sync {
    /// Retrieves an institution by its ID.
    fn get_by_id(&self, institution_id: &str) -> Result<Institution>;

    /// Returns true if an institution with the given ID exists.
    fn exists(&self, institution_id: &str) -> Result<bool>;
}
