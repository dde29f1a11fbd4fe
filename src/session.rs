//! The signed-in user, passed explicitly to every operation that needs one

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identity of the signed-in user as handed over by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's email address
    pub email: String,

    /// The user's display name
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

impl User {
    /// Create a new user identity
    pub fn new(email: &str, display_name: &str) -> Self {
        Self {
            email: email.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// Fail with `AuthRequired` unless somebody is signed in
pub fn require_user(user: Option<&User>) -> Result<&User> {
    user.ok_or(Error::AuthRequired)
}
