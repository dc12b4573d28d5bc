// src/auth/client.rs

use crate::auth::models::{ClientState, ErrorDetail, RegistrationOutcome, RegistrationRequest};
use crate::common::safe_email_log;
use reqwest::{Client, StatusCode};
use std::env;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("{0}")]
    Transport(String),

    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AuthConfig {
    /// Reads `AUTH_BASE_URL` from the environment, falling back to the
    /// local development backend.
    pub fn from_env() -> Self {
        let base_url =
            env::var("AUTH_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        Self {
            base_url,
            ..Self::default()
        }
    }
}

/// Drives one registration attempt end-to-end and publishes its state.
///
/// `is_loading`/`error_message` updates go through a watch channel, so a
/// subscriber always sees a whole [`ClientState`] per transition. A
/// submission lock keeps at most one attempt outstanding per client.
#[derive(Debug)]
pub struct RegistrationClient {
    client: Client,
    base_url: String,
    state_tx: watch::Sender<ClientState>,
    submit_lock: Mutex<()>,
}

impl RegistrationClient {
    pub fn new(config: AuthConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        let (state_tx, _) = watch::channel(ClientState::default());

        Self {
            client,
            base_url: config.base_url,
            state_tx,
            submit_lock: Mutex::new(()),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> ClientState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.state_tx.subscribe()
    }

    fn publish(&self, is_loading: bool, error_message: Option<String>) {
        self.state_tx.send_modify(|state| {
            state.is_loading = is_loading;
            state.error_message = error_message;
        });
    }

    /// Register a new account.
    ///
    /// Callers are expected to have run the sign-up validator first; the
    /// request is attempted with whatever values are supplied. Every failure
    /// mode is folded into [`RegistrationOutcome::Failure`] with a
    /// user-facing message, and `is_loading` is cleared on every exit path.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> RegistrationOutcome {
        // Serializes attempts so two submissions can never interleave state.
        let _guard = self.submit_lock.lock().await;

        self.publish(true, None);
        debug!(email = %safe_email_log(email), "Starting registration attempt");

        let outcome = match self.send_registration(name, email, password).await {
            Ok(()) => {
                info!(email = %safe_email_log(email), "Registration succeeded");
                RegistrationOutcome::Success
            }
            Err(e) => {
                warn!(email = %safe_email_log(email), error = %e, "Registration failed");
                RegistrationOutcome::Failure(e.to_string())
            }
        };

        let error_message = match &outcome {
            RegistrationOutcome::Success => None,
            RegistrationOutcome::Failure(message) => Some(message.clone()),
        };
        self.publish(false, error_message);

        outcome
    }

    async fn send_registration(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), RegistrationError> {
        let url = format!("{}/register", self.base_url.trim_end_matches('/'));
        let body = RegistrationRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RegistrationError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            // 200 carries a user record; no token to capture, body ignored.
            return Ok(());
        }

        let detail = response
            .json::<ErrorDetail>()
            .await
            .ok()
            .and_then(|e| e.detail)
            .unwrap_or_else(|| format!("Registration failed ({})", status.as_u16()));

        Err(RegistrationError::Rejected { status, detail })
    }
}
