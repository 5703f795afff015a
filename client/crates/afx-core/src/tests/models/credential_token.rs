use crate::{CoreError, CredentialToken};

#[test]
fn test_token_new_trims_value() {
    let token = CredentialToken::new("  tok-abc \n").unwrap();
    assert_eq!(token.expose(), "tok-abc");
}

#[test]
fn test_token_empty_is_rejected() {
    let err = CredentialToken::new("   ").unwrap_err();
    assert!(matches!(err, CoreError::InvalidToken { .. }));
}

#[test]
fn test_token_inner_whitespace_is_rejected() {
    assert!(CredentialToken::new("tok abc").is_err());
}

#[test]
fn test_token_bearer_header_value() {
    let token = CredentialToken::new("tok-abc").unwrap();
    assert_eq!(token.bearer(), "Bearer tok-abc");
}

#[test]
fn test_token_is_redacted_in_debug_and_display() {
    let token = CredentialToken::new("super-secret").unwrap();
    assert!(!format!("{token:?}").contains("super-secret"));
    assert!(!format!("{token}").contains("super-secret"));
}

#[test]
fn test_token_deserialize_rejects_empty_string() {
    assert!(serde_json::from_str::<CredentialToken>("\"\"").is_err());
}

#[test]
fn test_token_serializes_as_raw_string() {
    let token = CredentialToken::new("tok-abc").unwrap();
    assert_eq!(serde_json::to_string(&token).unwrap(), "\"tok-abc\"");
}
