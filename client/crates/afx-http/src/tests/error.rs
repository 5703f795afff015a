use crate::HttpError;

#[test]
fn given_401_status_error_when_is_unauthorized_then_true() {
    let err = HttpError::status(401, "TOKEN_EXPIRED", "expired");
    assert!(err.is_unauthorized());
    assert_eq!(err.status_code(), Some(401));
}

#[test]
fn given_403_status_error_when_is_unauthorized_then_false() {
    let err = HttpError::status(403, "FORBIDDEN", "nope");
    assert!(!err.is_unauthorized());
}

#[test]
fn given_status_error_when_display_then_includes_code_and_message() {
    let err = HttpError::status(404, "NOT_FOUND", "Account not found");
    let text = err.to_string();
    assert!(text.contains("404"));
    assert!(text.contains("NOT_FOUND"));
    assert!(text.contains("Account not found"));
}

#[test]
fn given_decode_error_when_status_code_then_none() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = HttpError::decode(json_err);
    assert_eq!(err.status_code(), None);
    assert!(!err.is_timeout());
}
