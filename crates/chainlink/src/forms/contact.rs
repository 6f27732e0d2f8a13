use serde::{Deserialize, Serialize};

use super::validation::{looks_like_email, FieldErrors, Validate};

pub const CONTACT_INDUSTRIES: &[&str] = &[
    "Retail & E-commerce",
    "Healthcare & Pharma",
    "Automotive",
    "FMCG & Food",
    "Technology & Electronics",
    "Manufacturing",
    "Other",
];

pub const CONTACT_COMPANY_SIZES: &[&str] = &[
    "Startup (1-10 employees)",
    "Small (11-50 employees)",
    "Medium (51-200 employees)",
    "Large (201-1000 employees)",
    "Enterprise (1000+ employees)",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub industry: String,
    pub company_size: String,
    pub message: String,
}

/// Editable inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Company,
    Phone,
    Industry,
    CompanySize,
    Message,
}

impl ContactField {
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::Phone => "phone",
            ContactField::Industry => "industry",
            ContactField::CompanySize => "company_size",
            ContactField::Message => "message",
        }
    }
}

impl ContactForm {
    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Phone => &mut self.phone,
            ContactField::Industry => &mut self.industry,
            ContactField::CompanySize => &mut self.company_size,
            ContactField::Message => &mut self.message,
        }
    }
}

// Hand-written checks rather than a Schema: required fields are trimmed and the email
// pattern is the permissive one.
impl Validate for ContactForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else if !looks_like_email(&self.email) {
            errors.insert("email", "Email is invalid");
        }
        if self.company.trim().is_empty() {
            errors.insert("company", "Company name is required");
        }
        if self.message.trim().is_empty() {
            errors.insert("message", "Message is required");
        }

        errors.into_result()
    }
}

/// Values plus inline errors for a mounted contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormState {
    pub values: ContactForm,
    pub errors: FieldErrors,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates one input and clears any error previously shown under it.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.values.slot(field) = value.into();
        self.errors.remove(field.key());
    }

    /// Validates the current values; on success returns the payload to hand off.
    pub fn submit(&mut self) -> Option<ContactForm> {
        match self.values.validate() {
            Ok(()) => {
                self.errors.clear();
                Some(self.values.clone())
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}
