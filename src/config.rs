//! Console configuration shared through Leptos context.
//!
//! DESIGN
//! ======
//! Every knob the session lifecycle depends on lives here so pages, guards,
//! and tests agree on storage keys, endpoints, and routes without scattering
//! string literals across modules.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SESSION_STORAGE_KEY: &str = "authToken";
pub const DEFAULT_VALIDATE_ENDPOINT: &str = "/api/validate-token";
pub const DEFAULT_SESSION_TTL_MS: i64 = 1000 * 60 * 60;
pub const DEFAULT_PLACEHOLDER_TOKEN: &str = "fake_jwt_token";
pub const DEFAULT_EMAIL_DOMAIN: &str = "gmail.com";
pub const DEFAULT_AUTH_PATH: &str = "/";
pub const DEFAULT_PROTECTED_PATH: &str = "/dashboard";
pub const DEFAULT_DARK_MODE_STORAGE_KEY: &str = "rxq_console_dark";

/// Typed console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// `localStorage` key holding the session record.
    pub session_storage_key: String,
    /// Remote token validation endpoint (GET, bearer credential).
    pub validate_endpoint: String,
    /// Lifetime of a freshly minted session, in milliseconds.
    pub session_ttl_ms: i64,
    /// Credential written on successful submit. No backend mints real tokens.
    pub placeholder_token: String,
    /// The only email domain the auth form accepts.
    pub email_domain: String,
    pub auth_path: String,
    pub protected_path: String,
    pub dark_mode_storage_key: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            session_storage_key: DEFAULT_SESSION_STORAGE_KEY.to_owned(),
            validate_endpoint: DEFAULT_VALIDATE_ENDPOINT.to_owned(),
            session_ttl_ms: DEFAULT_SESSION_TTL_MS,
            placeholder_token: DEFAULT_PLACEHOLDER_TOKEN.to_owned(),
            email_domain: DEFAULT_EMAIL_DOMAIN.to_owned(),
            auth_path: DEFAULT_AUTH_PATH.to_owned(),
            protected_path: DEFAULT_PROTECTED_PATH.to_owned(),
            dark_mode_storage_key: DEFAULT_DARK_MODE_STORAGE_KEY.to_owned(),
        }
    }
}

impl ConsoleConfig {
    #[must_use]
    pub fn with_session_ttl_ms(mut self, ttl_ms: i64) -> Self {
        self.session_ttl_ms = ttl_ms;
        self
    }

    #[must_use]
    pub fn with_email_domain(mut self, domain: impl Into<String>) -> Self {
        self.email_domain = domain.into().trim().trim_start_matches('@').to_ascii_lowercase();
        self
    }

    #[must_use]
    pub fn with_validate_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.validate_endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_session_storage_key(mut self, key: impl Into<String>) -> Self {
        self.session_storage_key = key.into();
        self
    }
}
