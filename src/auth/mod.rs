//! # Auth Module
//!
//! This module handles the account-registration flow including:
//! - Sign-up form validation (per-field results and the submit gate)
//! - The registration request against the backend `/register` endpoint
//! - Observable client state (`is_loading` / `error_message`) for the UI

pub mod client;
pub mod models;
pub mod validators;


pub use client::{AuthConfig, RegistrationClient, RegistrationError};
pub use models::{ClientState, RegistrationOutcome, RegistrationRequest};
pub use validators::{submit_error, SignUpForm, SignUpValidator};
