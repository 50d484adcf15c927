use super::*;

// =============================================================================
// IdentityConfig::from_env: env manipulation requires unsafe in edition 2024.
// These tests run serially (single test thread).
// =============================================================================

#[test]
fn from_env_reads_client_id() {
    unsafe { std::env::set_var(CLIENT_ID_ENV, "123.apps.googleusercontent.com") };
    let config = IdentityConfig::from_env();
    assert_eq!(config.client_id.as_deref(), Some("123.apps.googleusercontent.com"));
    assert!(config.federated_enabled());
    unsafe { std::env::remove_var(CLIENT_ID_ENV) };
}

#[test]
fn from_raw_missing_disables_federated() {
    let config = IdentityConfig::from_raw(None);
    assert_eq!(config, IdentityConfig::default());
    assert!(!config.federated_enabled());
}

#[test]
fn from_raw_blank_disables_federated() {
    assert!(!IdentityConfig::from_raw(Some("   ")).federated_enabled());
}

#[test]
fn from_raw_trims_surrounding_whitespace() {
    let config = IdentityConfig::from_raw(Some("  abc \n"));
    assert_eq!(config.client_id.as_deref(), Some("abc"));
}
