//! Registration data models

use serde::{Deserialize, Serialize};

/// JSON body of `POST /register`
#[derive(Serialize, Deserialize, Debug)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Error body the backend attaches to rejections, e.g.
/// `{"detail": "Email already registered"}`
#[derive(Deserialize, Debug)]
pub struct ErrorDetail {
    pub detail: Option<String>,
}

/// Terminal result of one registration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Success,
    Failure(String),
}

impl RegistrationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RegistrationOutcome::Success)
    }
}

/// Observable client state driving UI feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientState {
    pub is_loading: bool,
    pub error_message: Option<String>,
}
