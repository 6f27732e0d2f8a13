//! Login, signup, contact, and password-reset forms.
//!
//! Every form follows the same pattern: validate synchronously, then hand the payload to a
//! simulated submission that completes after a fixed delay unless the form is unmounted first.

pub mod contact;
pub mod forgot_password;
pub mod login;
pub mod password;
pub mod router;
pub mod service;
pub mod signup;
pub mod submission;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use contact::{
    ContactField, ContactForm, ContactFormState, CONTACT_COMPANY_SIZES, CONTACT_INDUSTRIES,
};
pub use forgot_password::ForgotPasswordForm;
pub use login::LoginForm;
pub use password::{PasswordPolicy, PasswordStrength};
pub use router::form_router;
pub use service::{FormService, FormServiceError, SessionId, SessionStatus, SessionView};
pub use signup::{
    AdminDetails, CompanyDetails, SignupForm, SignupStep, SignupVariant, SignupWizard,
    COMPANY_SIZES,
};
pub use submission::{FormPayload, SubmissionOutcome, SubmissionRecord, SubmissionSink};
pub use validation::{FieldErrors, Validate};

/// Each form surface of the site. Page and modal variants differ in delay and password rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Login,
    ModalLogin,
    Signup,
    ModalSignup,
    Contact,
    ForgotPassword,
}

impl FormKind {
    pub fn label(self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::ModalLogin => "modal_login",
            FormKind::Signup => "signup",
            FormKind::ModalSignup => "modal_signup",
            FormKind::Contact => "contact",
            FormKind::ForgotPassword => "forgot_password",
        }
    }

    pub fn is_login(self) -> bool {
        matches!(self, FormKind::Login | FormKind::ModalLogin)
    }

    /// Choices for the form's select inputs. Forms without selects get empty lists.
    pub fn options(self) -> FormOptions {
        match (self, self.signup_variant()) {
            (_, Some(variant)) => FormOptions {
                business_types: variant.business_types(),
                industries: variant.industries(),
                company_sizes: COMPANY_SIZES,
            },
            (FormKind::Contact, None) => FormOptions {
                business_types: &[],
                industries: CONTACT_INDUSTRIES,
                company_sizes: CONTACT_COMPANY_SIZES,
            },
            _ => FormOptions::default(),
        }
    }

    /// Signup variant for the two signup surfaces, `None` for every other form.
    pub fn signup_variant(self) -> Option<SignupVariant> {
        match self {
            FormKind::Signup => Some(SignupVariant::Page),
            FormKind::ModalSignup => Some(SignupVariant::Modal),
            _ => None,
        }
    }
}

/// Option lists behind a form's select inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FormOptions {
    pub business_types: &'static [&'static str],
    pub industries: &'static [&'static str],
    pub company_sizes: &'static [&'static str],
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
