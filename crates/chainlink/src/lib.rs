//! Core of the ChainLink Pro marketing site: supplier directory search, form validation with
//! simulated submissions, the auth modal context, and page routing.

pub mod auth_modal;
pub mod config;
pub mod directory;
pub mod error;
pub mod forms;
pub mod site;
pub mod telemetry;
