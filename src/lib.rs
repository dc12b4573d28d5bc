//! Registration client for the Zero on-premise AI backend.
//!
//! The UI collects `name`, `email`, `password` and `confirm_password`, gates
//! submission through [`auth::SignUpValidator`], and hands the values to
//! [`auth::RegistrationClient::register`]. The client performs one `POST
//! /register` attempt and publishes `is_loading` / `error_message` through a
//! watch channel for the UI to render.

pub mod auth;
pub mod common;

pub use auth::{
    AuthConfig, ClientState, RegistrationClient, RegistrationOutcome, SignUpForm, SignUpValidator,
};
