mod common;

use common::test_jwt_config;
use jobly::jobly_auth::{CredentialCodec, CredentialError, Identity};
use jobly::jobly_config::JwtConfig;

fn tamper_signature(token: &str) -> String {
    let (head, signature) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = signature.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    format!("{}.{}", head, chars.into_iter().collect::<String>())
}

fn tamper_payload(token: &str) -> String {
    let parts: Vec<&str> = token.split('.').collect();
    let mut payload: Vec<char> = parts[1].chars().collect();
    payload[2] = if payload[2] == 'x' { 'y' } else { 'x' };
    format!(
        "{}.{}.{}",
        parts[0],
        payload.into_iter().collect::<String>(),
        parts[2]
    )
}

#[test]
fn test_create_token_success() {
    let codec = CredentialCodec::new(&test_jwt_config());
    let token = codec.create(&Identity::new("u1", false)).unwrap();

    assert!(!token.is_empty());
    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_verify_round_trip() {
    let codec = CredentialCodec::new(&test_jwt_config());
    let token = codec.create(&Identity::new("u1", false)).unwrap();

    let identity = codec.verify(&token).unwrap();
    assert_eq!(identity.username(), "u1");
    assert!(!identity.is_admin());
}

#[test]
fn test_verify_round_trip_admin() {
    let codec = CredentialCodec::new(&test_jwt_config());
    let token = codec.create(&Identity::new("u1", true)).unwrap();

    assert!(codec.verify(&token).unwrap().is_admin());
}

#[test]
fn test_verify_tampered_signature() {
    let codec = CredentialCodec::new(&test_jwt_config());
    let token = codec.create(&Identity::user("u1")).unwrap();

    let result = codec.verify(&tamper_signature(&token));
    assert!(matches!(result, Err(CredentialError::Invalid(_))));
}

#[test]
fn test_verify_tampered_payload() {
    let codec = CredentialCodec::new(&test_jwt_config());
    let token = codec.create(&Identity::user("u1")).unwrap();

    assert!(codec.verify(&tamper_payload(&token)).is_err());
}

#[test]
fn test_verify_wrong_secret() {
    let token = CredentialCodec::new(&test_jwt_config())
        .create(&Identity::admin("u1"))
        .unwrap();

    let other = CredentialCodec::new(&JwtConfig::new("wrong_secret_key_for_testing"));
    assert!(other.verify(&token).is_err());
}

#[test]
fn test_verify_invalid() {
    let codec = CredentialCodec::new(&test_jwt_config());
    assert!(codec.verify("invalid.token.here").is_err());
}

#[test]
fn test_tokens_for_different_users_differ() {
    let codec = CredentialCodec::new(&test_jwt_config());
    let a = codec.create(&Identity::user("u1")).unwrap();
    let b = codec.create(&Identity::user("u2")).unwrap();

    assert_ne!(a, b);
    assert_eq!(codec.verify(&b).unwrap().username(), "u2");
}
