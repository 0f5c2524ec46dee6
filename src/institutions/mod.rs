//! Institutions module - financial institution descriptors.

mod institutions_errors;
mod institutions_model;
mod institutions_traits;

pub use institutions_errors::InstitutionError;
pub use institutions_model::{Institution, InstitutionType, NewInstitution};
pub use institutions_traits::InstitutionRepositoryTrait;
