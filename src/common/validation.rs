// Common validation types and the sign-up field rules

use regex::Regex;
use std::sync::OnceLock;

/// Special characters accepted toward password strength.
const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;':\",./<>?";

/// Minimum password length.
const PASSWORD_MIN_LEN: usize = 9;

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
            .expect("email regex is valid")
    })
}

/// Checks that the value looks like `local-part@domain.tld`.
///
/// Local part allows letters, digits and `._%+-`; the domain allows letters,
/// digits, `-` and `.`; the final label is 2-64 letters. Empty input fails.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Checks password strength: at least 9 characters with at least one
/// uppercase letter, one lowercase letter and one special character.
pub fn is_password_valid(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_LEN
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
}

/// Checks that the confirmation re-entry matches a non-empty password.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    !password.is_empty() && password == confirmation
}

/// Aggregate gate for the sign-up submit button.
pub fn can_submit(email: &str, password: &str, confirmation: &str) -> bool {
    is_valid_email(email) && is_password_valid(password) && passwords_match(password, confirmation)
}

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// First recorded error message, in the order the rules were checked.
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}
