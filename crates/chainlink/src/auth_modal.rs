//! Login/signup modal context.
//!
//! The modal state is a plain value owned by whoever renders the page and passed down
//! explicitly. `open`, `close`, and `switch_mode` are its only mutators; finishing a login or
//! signup closes it.

use serde::{Deserialize, Serialize};

use crate::forms::{SignupVariant, SignupWizard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone)]
pub struct AuthModal {
    is_open: bool,
    mode: AuthMode,
    signup: SignupWizard,
}

impl Default for AuthModal {
    fn default() -> Self {
        Self {
            is_open: false,
            mode: AuthMode::Login,
            signup: SignupWizard::new(SignupVariant::Modal),
        }
    }
}

impl AuthModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn open(&mut self, mode: AuthMode) {
        self.switch_mode(mode);
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Changes tabs without touching visibility. Entering signup starts a fresh wizard.
    pub fn switch_mode(&mut self, mode: AuthMode) {
        if mode == AuthMode::Signup && self.mode != AuthMode::Signup {
            self.signup.reset();
        }
        self.mode = mode;
    }

    pub fn signup(&self) -> &SignupWizard {
        &self.signup
    }

    pub fn signup_mut(&mut self) -> &mut SignupWizard {
        &mut self.signup
    }

    /// Called when the simulated login or signup finishes.
    pub fn complete_submission(&mut self) {
        self.close();
    }
}
