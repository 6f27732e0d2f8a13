use serde::{Deserialize, Serialize};

use super::validation::{FieldErrors, Schema, Validate};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl Validate for ForgotPasswordForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut schema = Schema::new();
        schema
            .field("email", &self.email)
            .email("Please enter a valid email address");
        schema.finish()
    }
}
