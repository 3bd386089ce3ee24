//! Typed client for the authentication backend.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `register` | [`AuthApi::sign_up`] |
//! | POST   | `validate/email` | [`AuthApi::check_email_available`] |
//!
//! Both paths are resolved against [`AuthClientConfig::base_url`]. Request
//! bodies are JSON sent as `application/json; charset=UTF-8`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use signup_core::{AuthApi, AuthApiError, EmailCheckRequest, RawResponse, RegisterRequest};
use url::Url;

use crate::config::AuthClientConfig;
use crate::error::ClientError;

/// Content type sent with every request body.
pub const JSON_UTF8: &str = "application/json; charset=UTF-8";

const REGISTER_ENDPOINT: &str = "POST /register";
const VALIDATE_EMAIL_ENDPOINT: &str = "POST /validate/email";

/// [`AuthApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    http: reqwest::Client,
    register_url: Url,
    validate_email_url: Url,
}

impl HttpAuthApi {
    /// Create a client from configuration.
    pub fn new(config: &AuthClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = HeaderMap::new();
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
                headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
                headers
            })
            .build()
            .map_err(ClientError::Init)?;

        Ok(Self {
            http,
            register_url: config.endpoint("register")?,
            validate_email_url: config.endpoint("validate/email")?,
        })
    }

    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        url: &Url,
        body: &T,
    ) -> Result<RawResponse, AuthApiError> {
        let payload = serde_json::to_vec(body).map_err(|e| AuthApiError::Request {
            endpoint: endpoint.into(),
            reason: e.to_string(),
        })?;

        let resp = self
            .http
            .post(url.clone())
            .body(payload)
            .send()
            .await
            .map_err(|e| AuthApiError::Transport {
                endpoint: endpoint.into(),
                reason: e.to_string(),
            })?;

        let status_code = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| AuthApiError::Body {
            endpoint: endpoint.into(),
            reason: e.to_string(),
        })?;

        tracing::debug!(endpoint, status_code, "auth backend responded");
        Ok(RawResponse::new(status_code, body.to_vec()))
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RawResponse, AuthApiError> {
        let req = RegisterRequest::new(username, email, password);
        self.post_json(REGISTER_ENDPOINT, &self.register_url, &req)
            .await
    }

    async fn check_email_available(&self, email: &str) -> bool {
        let req = EmailCheckRequest {
            email: email.to_string(),
        };
        match self
            .post_json(VALIDATE_EMAIL_ENDPOINT, &self.validate_email_url, &req)
            .await
        {
            Ok(resp) => resp.status_code == 200,
            Err(e) => {
                // Fail open.
                tracing::warn!(%email, "email availability check failed, assuming available: {e}");
                true
            }
        }
    }
}
