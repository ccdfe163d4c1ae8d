use super::*;
use crate::state::session::MemoryBackend;
use crate::util::clock;

fn ready_form(mode: AuthMode) -> AuthFormState {
    let mut form = AuthFormState::new(mode);
    form.settle_animation();
    form
}

fn memory_store() -> SessionStore<MemoryBackend> {
    SessionStore::new(MemoryBackend::default())
}

// =============================================================
// validate_email
// =============================================================

#[test]
fn validate_email_accepts_configured_domain() {
    assert_eq!(validate_email("user@gmail.com", "gmail.com"), None);
    assert_eq!(validate_email("first.last+tag_1%x-y@gmail.com", "gmail.com"), None);
}

#[test]
fn validate_email_rejects_other_shapes() {
    for value in [
        "user@other.com",
        "not-an-email",
        "",
        "@gmail.com",
        "user@gmail.com.evil",
        "user@GMAIL.COM",
        "us er@gmail.com",
        "user@@gmail.com",
        "a@b@gmail.com",
        " user@gmail.com",
    ] {
        let error = validate_email(value, "gmail.com");
        assert_eq!(error.as_deref(), Some(INVALID_EMAIL_MESSAGE), "value: {value:?}");
    }
}

#[test]
fn validate_email_follows_configured_domain() {
    assert_eq!(validate_email("ops@rxq.dev", "rxq.dev"), None);
    assert!(validate_email("ops@gmail.com", "rxq.dev").is_some());
}

// =============================================================
// set_mode / update_field
// =============================================================

#[test]
fn new_form_starts_in_login_and_animating() {
    let form = AuthFormState::default();
    assert_eq!(form.mode, AuthMode::Login);
    assert_eq!(form.phase(), FormPhase::Animating);
    assert!(!form.is_ready());
    assert!(form.email_error().is_none());
}

#[test]
fn set_mode_resets_every_field_and_the_gate() {
    let mut form = ready_form(AuthMode::Login);
    form.update_field(AuthField::Email, "bad".to_owned());
    form.update_field(AuthField::Password, "hunter2".to_owned());
    form.update_field(AuthField::Username, "ada".to_owned());
    assert_eq!(form.submit(&memory_store(), &ConsoleConfig::default()), SubmitOutcome::Rejected);

    form.set_mode(AuthMode::Signup);
    assert_eq!(form, AuthFormState::new(AuthMode::Signup));
    assert_eq!(form.fields, AuthFields::default());
    assert!(form.email_error().is_none());
    assert_eq!(form.phase(), FormPhase::Animating);
}

#[test]
fn set_mode_is_idempotent() {
    let mut once = ready_form(AuthMode::Login);
    once.update_field(AuthField::Email, "x@gmail.com".to_owned());
    let mut twice = once.clone();

    once.set_mode(AuthMode::Signup);
    twice.set_mode(AuthMode::Signup);
    twice.set_mode(AuthMode::Signup);
    assert_eq!(once, twice);
}

#[test]
fn editing_email_clears_stale_error() {
    let mut form = ready_form(AuthMode::Login);
    form.update_field(AuthField::Email, "user@other.com".to_owned());
    form.submit(&memory_store(), &ConsoleConfig::default());
    assert!(form.email_error().is_some());

    form.update_field(AuthField::Email, "user@other.co".to_owned());
    assert!(form.email_error().is_none());
}

#[test]
fn editing_password_keeps_email_error() {
    let mut form = ready_form(AuthMode::Login);
    form.submit(&memory_store(), &ConsoleConfig::default());
    form.update_field(AuthField::Password, "pw".to_owned());
    assert_eq!(form.email_error(), Some(INVALID_EMAIL_MESSAGE));
}

#[test]
fn mode_labels_and_toggle() {
    assert_eq!(AuthMode::Login.title(), "Login");
    assert_eq!(AuthMode::Signup.title(), "Sign Up");
    assert_eq!(AuthMode::Login.glyph(), "L");
    assert_eq!(AuthMode::Signup.glyph(), "S");
    assert_eq!(AuthMode::Login.other(), AuthMode::Signup);
    assert_eq!(AuthMode::Signup.other(), AuthMode::Login);
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_before_animation_settles_does_nothing() {
    let store = memory_store();
    let mut form = AuthFormState::default();
    form.update_field(AuthField::Email, "user@gmail.com".to_owned());
    assert_eq!(form.submit(&store, &ConsoleConfig::default()), SubmitOutcome::NotReady);
    assert!(store.backend().raw().is_none());
    assert!(form.email_error().is_none());
}

#[test]
fn submit_rejected_email_sets_error_without_touching_store() {
    let store = memory_store();
    store.save_at("existing", 1_000, 0);
    let before = store.backend().raw();

    let mut form = ready_form(AuthMode::Login);
    form.update_field(AuthField::Email, "user@other.com".to_owned());
    assert_eq!(form.submit(&store, &ConsoleConfig::default()), SubmitOutcome::Rejected);
    assert_eq!(form.email_error(), Some(INVALID_EMAIL_MESSAGE));
    assert_eq!(store.backend().raw(), before);
}

#[test]
fn submit_success_mints_one_hour_session() {
    let store = memory_store();
    let config = ConsoleConfig::default();
    let mut form = ready_form(AuthMode::Signup);
    form.update_field(AuthField::Username, "ada".to_owned());
    form.update_field(AuthField::Email, "ada@gmail.com".to_owned());
    form.update_field(AuthField::Password, "pw".to_owned());

    let before = clock::now_millis();
    assert_eq!(form.submit(&store, &config), SubmitOutcome::Authenticated);
    let after = clock::now_millis();

    let record = store.read().expect("session minted");
    assert_eq!(record.token, "fake_jwt_token");
    assert!(record.exp >= before + 3_600_000);
    assert!(record.exp <= after + 3_600_000);
    assert!(form.email_error().is_none());
}

#[test]
fn submit_never_persists_password_or_username() {
    let store = memory_store();
    let mut form = ready_form(AuthMode::Signup);
    form.update_field(AuthField::Username, "secret-user".to_owned());
    form.update_field(AuthField::Password, "secret-pass".to_owned());
    form.update_field(AuthField::Email, "ada@gmail.com".to_owned());
    form.submit(&store, &ConsoleConfig::default());

    let raw = store.backend().raw().expect("session minted");
    assert!(!raw.contains("secret-user"));
    assert!(!raw.contains("secret-pass"));
}

#[test]
fn submit_uses_configured_ttl() {
    let store = memory_store();
    let config = ConsoleConfig::default().with_session_ttl_ms(10_000);
    let mut form = ready_form(AuthMode::Login);
    form.update_field(AuthField::Email, "ada@gmail.com".to_owned());

    let before = clock::now_millis();
    form.submit(&store, &config);
    let exp = store.read().expect("session minted").exp;
    assert!(exp >= before + 10_000 && exp < before + 3_600_000);
}

// =============================================================
// entrance gate
// =============================================================

#[test]
fn settle_for_current_mode_opens_gate() {
    let mut form = AuthFormState::new(AuthMode::Signup);
    form.settle_animation_for(AuthMode::Signup);
    assert!(form.is_ready());
}

#[test]
fn settle_for_previous_mode_is_ignored() {
    let mut form = AuthFormState::new(AuthMode::Login);
    form.set_mode(AuthMode::Signup);
    form.settle_animation_for(AuthMode::Login);
    assert_eq!(form.phase(), FormPhase::Animating);
    assert!(!form.is_ready());
}

#[test]
fn fallback_timer_matches_stylesheet_duration() {
    let css = include_str!("../../style/console.css");
    let seconds = ENTRANCE_ANIMATION_MS / 1000;
    assert!(css.contains(&format!("animation: entrance-letter {seconds}s")));
}
