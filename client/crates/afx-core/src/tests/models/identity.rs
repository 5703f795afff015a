use crate::{Identity, Role};

use serde_json::json;

#[test]
fn test_identity_unknown_fields_land_in_profile() {
    let value = json!({
        "id": 7,
        "email": "trader@example.com",
        "firstName": "Ada",
        "last_name": "Lovelace",
        "role": "user",
        "phone": "+44 20 0000 0000",
        "balance": 1250.5
    });

    let identity: Identity = serde_json::from_value(value).unwrap();

    assert_eq!(identity.id, 7);
    assert_eq!(identity.first_name.as_deref(), Some("Ada"));
    assert_eq!(identity.last_name.as_deref(), Some("Lovelace"));
    assert_eq!(identity.role, Role::User);
    assert_eq!(identity.attribute("phone"), Some(&json!("+44 20 0000 0000")));
    assert_eq!(identity.attribute("balance"), Some(&json!(1250.5)));
    assert!(identity.attribute("role").is_none());
}

#[test]
fn test_identity_profile_survives_serialize_roundtrip() {
    let mut identity = Identity::new(3, "a@example.com", Role::Admin);
    identity
        .profile
        .insert("address".to_string(), json!({"city": "Limassol"}));

    let json = serde_json::to_string(&identity).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, identity);
}

#[test]
fn test_identity_missing_role_defaults_to_user() {
    let identity: Identity = serde_json::from_str(r#"{"id":1,"email":"x@y.z"}"#).unwrap();
    assert_eq!(identity.role, Role::User);
    assert!(identity.profile.is_empty());
}

#[test]
fn test_identity_display_name_uses_names_when_present() {
    let identity = Identity::new(1, "x@y.z", Role::User).with_name("Grace", "Hopper");
    assert_eq!(identity.display_name(), "Grace Hopper");
}

#[test]
fn test_identity_display_name_falls_back_to_email() {
    let mut identity = Identity::new(1, "x@y.z", Role::User);
    identity.first_name = Some("  ".to_string());
    assert_eq!(identity.display_name(), "x@y.z");
}

#[test]
fn test_identity_has_role() {
    let admin = Identity::new(1, "a@b.c", Role::Admin);
    assert!(admin.has_role("admin"));
    assert!(!admin.has_role("user"));
}

#[test]
fn test_identity_without_id_is_rejected() {
    let result = serde_json::from_str::<Identity>(r#"{"email":"x@y.z"}"#);
    assert!(result.is_err());
}

#[test]
fn test_identity_numeric_role_is_accepted() {
    let identity: Identity =
        serde_json::from_str(r#"{"id":1,"email":"a@b.c","role":1}"#).unwrap();
    assert_eq!(identity.role, Role::Other("1".to_string()));
}

#[test]
fn test_identity_string_id_is_accepted() {
    let identity: Identity = serde_json::from_str(r#"{"id":"7","email":"a@b.c"}"#).unwrap();
    assert_eq!(identity.id, 7);
}

#[test]
fn test_identity_non_numeric_string_id_is_rejected() {
    let result = serde_json::from_str::<Identity>(r#"{"id":"abc","email":"a@b.c"}"#);
    assert!(result.is_err());
}

#[test]
fn test_identity_string_id_serializes_back_as_number() {
    let identity: Identity = serde_json::from_str(r#"{"id":"7","email":"a@b.c"}"#).unwrap();
    let value = serde_json::to_value(&identity).unwrap();
    assert_eq!(value["id"], json!(7));
}
