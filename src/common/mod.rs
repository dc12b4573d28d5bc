// Common module - shared types and utilities across all modules

pub mod helpers;
pub mod validation;

// Re-export commonly used types for convenience
pub use helpers::safe_email_log;
pub use validation::{
    can_submit, is_password_valid, is_valid_email, passwords_match, ValidationError,
    ValidationResult, Validator,
};
