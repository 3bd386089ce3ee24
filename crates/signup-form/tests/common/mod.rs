//! Shared test doubles for the form integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use signup_core::{AuthApi, AuthApiError, RawResponse};

/// In-memory `AuthApi` that records every call.
#[derive(Default)]
pub struct StubAuthApi {
    taken: HashSet<String>,
    delays: HashMap<String, Duration>,
    sign_up_response: Mutex<Option<Result<RawResponse, String>>>,
    pub checks: Mutex<Vec<String>>,
    pub sign_ups: Mutex<Vec<(String, String, String)>>,
}

impl StubAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `email` as already registered.
    pub fn with_taken(mut self, email: &str) -> Self {
        self.taken.insert(email.to_string());
        self
    }

    /// Make the availability check for `email` take `delay`.
    pub fn with_delay(mut self, email: &str, delay: Duration) -> Self {
        self.delays.insert(email.to_string(), delay);
        self
    }

    pub fn with_sign_up_response(self, status: u16, body: &str) -> Self {
        *self.sign_up_response.lock() = Some(Ok(RawResponse::new(status, body.as_bytes())));
        self
    }

    pub fn with_sign_up_transport_error(self, reason: &str) -> Self {
        *self.sign_up_response.lock() = Some(Err(reason.to_string()));
        self
    }

    pub fn check_calls(&self) -> Vec<String> {
        self.checks.lock().clone()
    }

    pub fn sign_up_calls(&self) -> Vec<(String, String, String)> {
        self.sign_ups.lock().clone()
    }
}

#[async_trait]
impl AuthApi for StubAuthApi {
    async fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RawResponse, AuthApiError> {
        self.sign_ups
            .lock()
            .push((username.to_string(), email.to_string(), password.to_string()));
        let response = self.sign_up_response.lock().clone();
        match response {
            Some(Ok(raw)) => Ok(raw),
            Some(Err(reason)) => Err(AuthApiError::Transport {
                endpoint: "POST /register".into(),
                reason,
            }),
            None => Ok(RawResponse::new(
                200,
                br#"{"access_token":"tok","token_type":"Bearer","expires_in":3600}"#.to_vec(),
            )),
        }
    }

    async fn check_email_available(&self, email: &str) -> bool {
        self.checks.lock().push(email.to_string());
        if let Some(delay) = self.delays.get(email) {
            tokio::time::sleep(*delay).await;
        }
        !self.taken.contains(email)
    }
}

pub const SUCCESS_BODY: &str =
    r#"{"access_token":"tok-123","token_type":"Bearer","expires_in":3600}"#;
