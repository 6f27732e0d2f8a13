use serde::{Deserialize, Serialize};

use super::validation::{FieldErrors, Schema, Validate};

/// Credentials as typed into the login page or the auth modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Company identifier, collected when the user signs in through the company tab.
    pub company: Option<String>,
    pub remember_me: bool,
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut schema = Schema::new();
        schema
            .field("email", &self.email)
            .email("Please enter a valid email address");
        schema
            .field("password", &self.password)
            .min_len(1, "Password is required");
        schema.finish()
    }
}
