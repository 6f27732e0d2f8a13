//! Two-step company signup.
//!
//! The wizard starts on the company step. [`SignupWizard::next`] validates only the company
//! fields and refuses to advance while any of them fails; [`SignupWizard::back`] always returns
//! to the company step and keeps whatever was typed into the admin step. The final
//! [`SignupWizard::submit`] validates the combined payload and only then calls the handler.

use serde::{Deserialize, Serialize};

use super::password::PasswordPolicy;
use super::validation::{FieldErrors, Schema, Validate};

/// Which of the two signup surfaces the form belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupVariant {
    /// Standalone `/signup` page.
    #[default]
    Page,
    /// Signup tab of the auth modal.
    Modal,
}

impl SignupVariant {
    pub fn password_policy(self) -> PasswordPolicy {
        match self {
            SignupVariant::Page => PasswordPolicy::Strict,
            SignupVariant::Modal => PasswordPolicy::Standard,
        }
    }

    fn location_message(self) -> &'static str {
        match self {
            SignupVariant::Page => "Company location is required",
            SignupVariant::Modal => "Please enter company location",
        }
    }

    fn terms_message(self) -> &'static str {
        match self {
            SignupVariant::Page => "You must agree to the terms and conditions",
            SignupVariant::Modal => "You must agree to the terms and privacy policy",
        }
    }

    pub fn business_types(self) -> &'static [&'static str] {
        match self {
            SignupVariant::Page => &[
                "Manufacturer",
                "Distributor",
                "Wholesaler",
                "Retailer",
                "Supplier",
                "Logistics Provider",
                "Other",
            ],
            SignupVariant::Modal => &[
                "Manufacturer",
                "Distributor",
                "Retailer",
                "Logistics Provider",
                "Supplier",
                "Service Provider",
            ],
        }
    }

    pub fn industries(self) -> &'static [&'static str] {
        match self {
            SignupVariant::Page => &[
                "FMCG & Food",
                "Healthcare & Pharma",
                "Automotive",
                "Electronics & Technology",
                "Apparel & Fashion",
                "Packaging & Materials",
                "Chemicals",
                "Agriculture",
                "Construction",
                "Other",
            ],
            SignupVariant::Modal => &[
                "Automotive",
                "Electronics",
                "Healthcare",
                "Food & Beverage",
                "Textile & Apparel",
                "Pharmaceuticals",
                "Consumer Goods",
                "Industrial Equipment",
            ],
        }
    }
}

pub const COMPANY_SIZES: &[&str] = &[
    "1-10 employees",
    "11-50 employees",
    "51-200 employees",
    "201-1000 employees",
    "1000+ employees",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyDetails {
    pub company_name: String,
    pub business_type: String,
    pub industry: String,
    pub company_size: Option<String>,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminDetails {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
    pub subscribe_newsletter: bool,
}

/// Complete payload handed off once both steps validate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    #[serde(flatten)]
    pub company: CompanyDetails,
    #[serde(flatten)]
    pub admin: AdminDetails,
}

impl CompanyDetails {
    fn check(&self, schema: &mut Schema, variant: SignupVariant) {
        schema
            .field("company_name", &self.company_name)
            .min_len(2, "Company name must be at least 2 characters");
        schema
            .field("business_type", &self.business_type)
            .min_len(1, "Please select a business type");
        schema
            .field("industry", &self.industry)
            .min_len(1, "Please select an industry");
        schema
            .field("location", &self.location)
            .min_len(2, variant.location_message());
    }

    pub fn validate_for(&self, variant: SignupVariant) -> Result<(), FieldErrors> {
        let mut schema = Schema::new();
        self.check(&mut schema, variant);
        schema.finish()
    }
}

impl Validate for CompanyDetails {
    fn validate(&self) -> Result<(), FieldErrors> {
        self.validate_for(SignupVariant::Page)
    }
}

impl AdminDetails {
    fn check(&self, schema: &mut Schema, variant: SignupVariant) {
        schema
            .field("full_name", &self.full_name)
            .min_len(2, "Full name must be at least 2 characters");
        schema
            .field("email", &self.email)
            .email("Please enter a valid email address");
        variant
            .password_policy()
            .apply(schema.field("password", &self.password));
        schema
            .field("confirm_password", &self.confirm_password)
            .equals(&self.password, "Passwords don't match");
        schema.must_be_true("agree_to_terms", self.agree_to_terms, variant.terms_message());
    }
}

impl SignupForm {
    pub fn validate_for(&self, variant: SignupVariant) -> Result<(), FieldErrors> {
        let mut schema = Schema::new();
        self.company.check(&mut schema, variant);
        self.admin.check(&mut schema, variant);
        schema.finish()
    }
}

impl Validate for SignupForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        self.validate_for(SignupVariant::Page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupStep {
    #[default]
    Company,
    Admin,
}

/// Form state for one mounted signup wizard.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignupWizard {
    variant: SignupVariant,
    step: SignupStep,
    pub company: CompanyDetails,
    pub admin: AdminDetails,
    errors: FieldErrors,
}

impl SignupWizard {
    pub fn new(variant: SignupVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn variant(&self) -> SignupVariant {
        self.variant
    }

    pub fn step(&self) -> SignupStep {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validates the company step and advances on success. Returns whether the wizard is now
    /// on the admin step.
    pub fn next(&mut self) -> bool {
        match self.company.validate_for(self.variant) {
            Ok(()) => {
                self.errors.clear();
                self.step = SignupStep::Admin;
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Returns to the company step without discarding admin input.
    pub fn back(&mut self) {
        self.step = SignupStep::Company;
    }

    /// Validates the full payload and invokes `handler` with it only when everything passes.
    ///
    /// Called on the company step this behaves like [`next`](Self::next) and never reaches
    /// the handler.
    pub fn submit<R>(&mut self, handler: impl FnOnce(SignupForm) -> R) -> Option<R> {
        if self.step == SignupStep::Company {
            self.next();
            return None;
        }

        let form = SignupForm {
            company: self.company.clone(),
            admin: self.admin.clone(),
        };

        match form.validate_for(self.variant) {
            Ok(()) => {
                self.errors.clear();
                Some(handler(form))
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Back to a blank company step, as when the signup surface is reopened.
    pub fn reset(&mut self) {
        *self = Self::new(self.variant);
    }
}
