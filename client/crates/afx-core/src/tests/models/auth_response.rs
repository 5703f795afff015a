use crate::{AuthResponse, Role};

use serde_json::json;

#[test]
fn test_auth_response_accepts_token_key() {
    let response: AuthResponse = serde_json::from_value(json!({
        "user": {"id": 1, "email": "a@b.c", "role": "admin"},
        "token": "tok-abc"
    }))
    .unwrap();

    assert_eq!(response.user.role, Role::Admin);
    assert_eq!(response.token.expose(), "tok-abc");
}

#[test]
fn test_auth_response_accepts_access_token_aliases() {
    for key in ["access_token", "accessToken"] {
        let response: AuthResponse = serde_json::from_value(json!({
            "user": {"id": 2, "email": "a@b.c"},
            key: "tok-xyz"
        }))
        .unwrap();
        assert_eq!(response.token.expose(), "tok-xyz");
    }
}

#[test]
fn test_auth_response_missing_token_is_rejected() {
    let result = serde_json::from_value::<AuthResponse>(json!({
        "user": {"id": 2, "email": "a@b.c"}
    }));
    assert!(result.is_err());
}
