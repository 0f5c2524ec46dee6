//! User domain model.

use serde::{Deserialize, Serialize};

/// The owner of accounts and transactions.
///
/// Authentication, tokens, and password handling live outside this crate;
/// the core only needs the identity for reference checks.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}
