use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE};
use serde_json::json;

use super::*;
use crate::util::session::{MemoryStore, USER_INFO_KEY};

fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.c2lnbmF0dXJl")
}

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decode_claims_reads_name_and_email() {
    let token = token_with(&json!({ "name": "Bo", "email": "bo@x.com", "sub": "42" }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.name, Some(json!("Bo")));
    assert_eq!(claims.email, Some(json!("bo@x.com")));
}

#[test]
fn decode_claims_ignores_signature_segment() {
    let token = token_with(&json!({ "email": "bo@x.com" }));
    let forged = format!("{}.not-a-real-signature", token.rsplit_once('.').unwrap().0);
    assert!(decode_claims(&forged).is_ok());
}

#[test]
fn decode_claims_accepts_padded_payload() {
    let body = URL_SAFE.encode(r#"{"name":"Al"}"#);
    assert!(body.ends_with('='));
    let claims = decode_claims(&format!("h.{body}.s")).unwrap();
    assert_eq!(claims.name, Some(json!("Al")));
}

#[test]
fn decode_claims_accepts_standard_alphabet() {
    let body = STANDARD_NO_PAD.encode(r#"{"name":"?>?>","email":"~~~@x.com"}"#);
    assert!(body.contains('/') && body.contains('+'));
    let claims = decode_claims(&format!("h.{body}.s")).unwrap();
    assert_eq!(claims.name, Some(json!("?>?>")));
    assert_eq!(claims.email, Some(json!("~~~@x.com")));
}

#[test]
fn decode_claims_accepts_padded_standard_alphabet() {
    let body = STANDARD.encode(r#"{"name":"?>?>","email":"ab~~~@x.com"}"#);
    assert!(body.ends_with("==") && body.contains('/'));
    let claims = decode_claims(&format!("h.{body}.s")).unwrap();
    assert_eq!(claims.email, Some(json!("ab~~~@x.com")));
}

#[test]
fn decode_claims_missing_payload_segment() {
    assert!(matches!(decode_claims("onlyheader"), Err(DecodeError::MissingPayload)));
}

#[test]
fn decode_claims_rejects_bad_base64() {
    assert!(matches!(decode_claims("h.@@@@.s"), Err(DecodeError::Base64(_))));
}

#[test]
fn decode_claims_rejects_non_json_payload() {
    let body = URL_SAFE_NO_PAD.encode("plain text");
    assert!(matches!(decode_claims(&format!("h.{body}.s")), Err(DecodeError::Json(_))));
}

#[test]
fn decode_claims_rejects_non_object_payload() {
    let body = URL_SAFE_NO_PAD.encode("[1,2,3]");
    assert!(matches!(decode_claims(&format!("h.{body}.s")), Err(DecodeError::Json(_))));
}

// =============================================================
// on_success
// =============================================================

#[test]
fn on_success_records_claims_profile() {
    let store = MemoryStore::new();
    let token = token_with(&json!({ "name": "Bo", "email": "bo@x.com" }));

    let profile = on_success(&store, &token).unwrap();

    assert_eq!(profile, UserProfile::new(Some("Bo"), Some("bo@x.com")));
    assert_eq!(store.raw(USER_INFO_KEY).as_deref(), Some(r#"{"name":"Bo","email":"bo@x.com"}"#));
}

#[test]
fn on_success_stores_non_string_claims_as_is() {
    let store = MemoryStore::new();
    let token = token_with(&json!({ "name": 7, "email": "bo@x.com" }));

    let profile = on_success(&store, &token).unwrap();

    assert_eq!(profile.name, Some(json!(7)));
    assert_eq!(store.raw(USER_INFO_KEY).as_deref(), Some(r#"{"name":7,"email":"bo@x.com"}"#));
}

#[test]
fn on_success_absent_claims_stay_absent() {
    let store = MemoryStore::new();
    let token = token_with(&json!({ "sub": "42" }));

    let profile = on_success(&store, &token).unwrap();

    assert_eq!(profile, UserProfile::default());
    assert_eq!(store.raw(USER_INFO_KEY).as_deref(), Some("{}"));
}

#[test]
fn on_success_malformed_token_writes_nothing() {
    let store = MemoryStore::new();
    let err = on_success(&store, "garbage").unwrap_err();
    assert!(matches!(err, IdentityError::Decode(DecodeError::MissingPayload)));
    assert_eq!(store.write_count(), 0);
}

#[test]
fn provider_error_messages() {
    assert_eq!(ProviderError::Failed.to_string(), "identity provider sign-in failed");
    assert_eq!(ProviderError::MissingCredential.to_string(), "identity provider response had no credential");
}
