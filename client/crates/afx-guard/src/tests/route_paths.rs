use crate::RoutePaths;

use afx_config::RoutesConfig;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_default_paths_when_checked_then_match_default_routes_config() {
    let paths = RoutePaths::default();

    assert_that!(paths.admin_prefix, eq("/afxadmin"));
    assert_that!(paths.login_path, eq("/login"));
    assert_that!(paths.admin_login_path, eq("/afxadmin/login"));
    assert_that!(paths.landing_path, eq("/dashboard"));
    assert_that!(paths.admin_role, eq("admin"));
}

#[test]
fn given_custom_config_when_converted_then_paths_follow() {
    let config = RoutesConfig {
        admin_prefix: "/backoffice".into(),
        admin_login_path: "/backoffice/signin".into(),
        ..RoutesConfig::default()
    };

    let paths = RoutePaths::from(&config);

    assert!(paths.is_admin_path("/backoffice/users"));
    assert!(!paths.is_admin_path("/afxadmin/users"));
    assert!(paths.is_login_path("/backoffice/signin"));
}

#[test]
fn given_prefix_when_matching_then_plain_string_prefix() {
    let paths = RoutePaths::default();

    assert!(paths.is_admin_path("/afxadmin"));
    assert!(paths.is_admin_path("/afxadmin/settings"));
    assert!(!paths.is_admin_path("/dashboard/afxadmin"));
}

#[test]
fn given_paths_when_checking_login_then_both_login_pages_match() {
    let paths = RoutePaths::default();

    assert!(paths.is_login_path("/login"));
    assert!(paths.is_login_path("/afxadmin/login"));
    assert!(!paths.is_login_path("/signup"));
}
