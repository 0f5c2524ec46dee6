//! Institution domain models.

use serde::{Deserialize, Serialize};

use super::institutions_errors::InstitutionError;
use crate::errors::Result;

/// Kind of financial institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstitutionType {
    PersonalBank,
    BusinessBank,
    Investment,
}

/// A financial institution an account can belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: String,
    pub name: String,
    pub institution_type: InstitutionType,
    pub image_url: Option<String>,
    pub primary_color: Option<String>,
    /// Connector ID in the data provider's catalogue, for automatic accounts.
    pub provider_connector_id: Option<String>,
}

/// Input model for registering an institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstitution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub institution_type: InstitutionType,
    pub image_url: Option<String>,
    pub primary_color: Option<String>,
    pub provider_connector_id: Option<String>,
}

impl NewInstitution {
    /// Validates the new institution data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(InstitutionError::Invalid("name cannot be empty".to_string()).into());
        }
        Ok(())
    }
}
