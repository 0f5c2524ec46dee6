//! Categories module - transaction classification tags.

mod categories_constants;
mod categories_model;
mod categories_traits;

pub use categories_constants::*;
pub use categories_model::{Category, NewCategory};
pub use categories_traits::CategoryRepositoryTrait;
