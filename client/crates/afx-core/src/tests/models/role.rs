use crate::Role;

#[test]
fn test_role_from_str_admin_is_case_insensitive() {
    assert_eq!(Role::from("admin"), Role::Admin);
    assert_eq!(Role::from("ADMIN"), Role::Admin);
    assert_eq!(Role::from(" Admin "), Role::Admin);
}

#[test]
fn test_role_from_str_user_and_empty() {
    assert_eq!(Role::from("user"), Role::User);
    assert_eq!(Role::from(""), Role::User);
}

#[test]
fn test_role_unknown_value_is_preserved() {
    let role = Role::from("introducing_broker");
    assert_eq!(role, Role::Other("introducing_broker".to_string()));
    assert_eq!(role.as_str(), "introducing_broker");
    assert!(!role.is_admin());
}

#[test]
fn test_role_matches_configured_name() {
    assert!(Role::Admin.matches("Admin"));
    assert!(Role::Other("manager".into()).matches("MANAGER"));
    assert!(!Role::User.matches("admin"));
}

#[test]
fn test_role_missing_or_null_deserializes_to_user() {
    let role: Role = serde_json::from_str("null").unwrap();
    assert_eq!(role, Role::User);
}

#[test]
fn test_role_serializes_as_plain_string() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(
        serde_json::to_string(&Role::Other("ib".into())).unwrap(),
        "\"ib\""
    );
}

#[test]
fn test_role_numeric_code_deserializes_as_text() {
    let role: Role = serde_json::from_str("1").unwrap();
    assert_eq!(role, Role::Other("1".to_string()));
    assert!(role.matches("1"));
}

#[test]
fn test_role_string_still_deserializes_by_name() {
    let role: Role = serde_json::from_str("\"Admin\"").unwrap();
    assert_eq!(role, Role::Admin);
}
