use super::*;

#[test]
fn default_config_matches_console_constants() {
    let cfg = ConsoleConfig::default();
    assert_eq!(cfg.session_storage_key, "authToken");
    assert_eq!(cfg.validate_endpoint, "/api/validate-token");
    assert_eq!(cfg.session_ttl_ms, 3_600_000);
    assert_eq!(cfg.email_domain, "gmail.com");
    assert_eq!(cfg.auth_path, "/");
    assert_eq!(cfg.protected_path, "/dashboard");
}

#[test]
fn with_email_domain_normalizes_input() {
    let cfg = ConsoleConfig::default().with_email_domain("  @Example.ORG ");
    assert_eq!(cfg.email_domain, "example.org");
}

#[test]
fn builders_override_individual_fields() {
    let cfg = ConsoleConfig::default()
        .with_session_ttl_ms(5_000)
        .with_validate_endpoint("/api/v2/validate")
        .with_session_storage_key("session");
    assert_eq!(cfg.session_ttl_ms, 5_000);
    assert_eq!(cfg.validate_endpoint, "/api/v2/validate");
    assert_eq!(cfg.session_storage_key, "session");
    assert_eq!(cfg.placeholder_token, DEFAULT_PLACEHOLDER_TOKEN);
}
