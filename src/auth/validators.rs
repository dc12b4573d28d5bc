// src/auth/validators.rs

use crate::common::{
    is_password_valid, is_valid_email, passwords_match, ValidationResult, Validator,
};

pub const EMAIL_RULE_MESSAGE: &str = "Please enter a valid email address.";
pub const PASSWORD_RULE_MESSAGE: &str = "Password does not meet the requirements.";
pub const CONFIRM_RULE_MESSAGE: &str = "Passwords do not match.";

/// Field values collected by the sign-up form on submit.
#[derive(Debug, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

// ============================================================================
// Sign-up Validator
// ============================================================================

pub struct SignUpValidator;

impl Validator<SignUpForm> for SignUpValidator {
    fn validate(&self, data: &SignUpForm) -> ValidationResult {
        let mut result = ValidationResult::new();

        if !is_valid_email(&data.email) {
            result.add_error("email", EMAIL_RULE_MESSAGE);
        }

        if !is_password_valid(&data.password) {
            result.add_error("password", PASSWORD_RULE_MESSAGE);
        }

        if !passwords_match(&data.password, &data.confirm_password) {
            result.add_error("confirm_password", CONFIRM_RULE_MESSAGE);
        }

        result
    }
}

/// Pre-submit gate: the first failing rule in priority order
/// (email, then password strength, then confirmation match), or `None`
/// when the form is submittable.
pub fn submit_error(email: &str, password: &str, confirmation: &str) -> Option<&'static str> {
    if !is_valid_email(email) {
        Some(EMAIL_RULE_MESSAGE)
    } else if !is_password_valid(password) {
        Some(PASSWORD_RULE_MESSAGE)
    } else if !passwords_match(password, confirmation) {
        Some(CONFIRM_RULE_MESSAGE)
    } else {
        None
    }
}
