//! Login/signup form state machine.
//!
//! DESIGN
//! ======
//! The credential inputs exist only once the decorative entrance animation
//! has settled (`FormPhase::Ready`). Switching modes rebuilds the whole state,
//! so no field value, error, or settled gate survives a switch.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use std::sync::LazyLock;

use regex::Regex;

use super::session::{SessionBackend, SessionStore};
use crate::config::ConsoleConfig;

pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email";

/// Duration of the entrance glyph animation (`style/console.css`). The gate
/// also opens on a timer of this length in case `animationend` never fires.
pub const ENTRANCE_ANIMATION_MS: u32 = 2_000;

static LOCAL_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+$").expect("local-part pattern compiles"));

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
        }
    }

    /// Glyph drawn by the entrance animation.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Login => "L",
            Self::Signup => "S",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

/// Whether the entrance animation has finished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Animating,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
    /// Only rendered in [`AuthMode::Signup`].
    Username,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFields {
    pub email: String,
    pub password: String,
    pub username: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submit control does not exist yet; nothing happened.
    NotReady,
    /// Email failed the shape check; `email_error` is set.
    Rejected,
    /// A session was minted; navigate to the protected area.
    Authenticated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub fields: AuthFields,
    email_error: Option<String>,
    phase: FormPhase,
}

impl AuthFormState {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn email_error(&self) -> Option<&str> {
        self.email_error.as_deref()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == FormPhase::Ready
    }

    /// Switch to `next`, resetting fields, error, and the animation gate.
    pub fn set_mode(&mut self, next: AuthMode) {
        *self = Self::new(next);
    }

    pub fn update_field(&mut self, field: AuthField, value: String) {
        match field {
            AuthField::Email => {
                self.fields.email = value;
                self.email_error = None;
            }
            AuthField::Password => self.fields.password = value,
            AuthField::Username => self.fields.username = value,
        }
    }

    /// The entrance animation reported completion.
    pub fn settle_animation(&mut self) {
        self.phase = FormPhase::Ready;
    }

    /// Settle only if `mode` is still current. A glyph or timer left over from
    /// before a mode switch must not open the new mode's gate early.
    pub fn settle_animation_for(&mut self, mode: AuthMode) {
        if self.mode == mode {
            self.settle_animation();
        }
    }

    /// Validate the email and, on success, mint a session in `store`.
    ///
    /// Password and username are never validated or sent anywhere.
    pub fn submit<B: SessionBackend>(&mut self, store: &SessionStore<B>, config: &ConsoleConfig) -> SubmitOutcome {
        if !self.is_ready() {
            return SubmitOutcome::NotReady;
        }
        self.email_error = validate_email(&self.fields.email, &config.email_domain);
        if self.email_error.is_some() {
            return SubmitOutcome::Rejected;
        }
        store.save(&config.placeholder_token, config.session_ttl_ms);
        log::info!("{} succeeded; session minted", self.mode.title());
        SubmitOutcome::Authenticated
    }
}

/// Accept only `<local-part>@<domain>`, where the local part uses
/// `[a-zA-Z0-9._%+-]` and the domain matches exactly.
///
/// Returns the message to show under the input, or `None` when accepted.
pub fn validate_email(value: &str, domain: &str) -> Option<String> {
    let accepted = value
        .split_once('@')
        .is_some_and(|(local, host)| host == domain && LOCAL_PART.is_match(local));
    if accepted { None } else { Some(INVALID_EMAIL_MESSAGE.to_owned()) }
}
