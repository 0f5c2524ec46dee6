//! Category repository trait.

use super::categories_model::Category;
use crate::errors::Result;

/// Trait defining the contract for category lookups.
///
/// Implementations handle persistence; the core only reads categories to
/// resolve references and to detect the card-payment category.
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Retrieves a category by its ID.
    fn get_by_id(&self, category_id: &str) -> Result<Category>;

    /// Returns true if a category with the given ID exists.
    fn exists(&self, category_id: &str) -> Result<bool>;

    /// Finds a category by its exact name, if present. Used to resolve
    /// shared categories such as the card-payment category, which has no
    /// owning user.
    fn find_by_name(&self, name: &str) -> Result<Option<Category>>;
}
