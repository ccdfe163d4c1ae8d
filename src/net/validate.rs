//! Remote session token validation.
//!
//! Client-side (hydrate): `GET` the configured endpoint via `gloo-net` with
//! the token as a bearer credential and read `{ "valid": boolean }`.
//! Server-side (SSR): always errors, since the token only lives in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode is a [`ValidationError`] variant. Callers in the guard
//! collapse all of them to "not authenticated".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    /// The request never produced a response.
    #[error("validation request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("validation response error: status {0}")]
    Status(u16),

    /// The body was not JSON or lacked a boolean `valid` field.
    #[error("validation response malformed: {0}")]
    Malformed(String),
}

/// Remote authority that decides whether a stored token is still good.
#[async_trait::async_trait(?Send)]
pub trait TokenValidator {
    /// Ask the authority about `token`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the authority is unreachable or
    /// answers with an unexpected shape.
    async fn validate(&self, token: &str) -> Result<bool, ValidationError>;
}

/// Validator backed by the console's HTTP validation endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTokenValidator {
    endpoint: String,
}

impl HttpTokenValidator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl TokenValidator for HttpTokenValidator {
    async fn validate(&self, token: &str) -> Result<bool, ValidationError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(|e| ValidationError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ValidationError::Status(resp.status()));
            }
            let body = resp.text().await.map_err(|e| ValidationError::Transport(e.to_string()))?;
            parse_validation_body(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ValidationError::Transport("not available on server".to_owned()))
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Read the `valid` flag from a validation response body.
#[cfg(any(test, feature = "hydrate"))]
fn parse_validation_body(body: &str) -> Result<bool, ValidationError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ValidationError::Malformed(e.to_string()))?;
    value
        .get("valid")
        .and_then(serde_json::Value::as_bool)
        .ok_or_else(|| ValidationError::Malformed("missing boolean `valid` field".to_owned()))
}
