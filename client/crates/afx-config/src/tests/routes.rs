use crate::RoutesConfig;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_default_routes_when_validate_then_ok() {
    assert_that!(RoutesConfig::default().validate(), ok(anything()));
}

#[test]
fn given_relative_login_path_when_validate_then_error() {
    let routes = RoutesConfig {
        login_path: "login".to_string(),
        ..Default::default()
    };
    assert_that!(routes.validate(), err(anything()));
}

#[test]
fn given_admin_login_outside_admin_prefix_when_validate_then_error() {
    let routes = RoutesConfig {
        admin_login_path: "/admin-login".to_string(),
        ..Default::default()
    };
    assert_that!(routes.validate(), err(anything()));
}

#[test]
fn given_root_admin_prefix_when_validate_then_error() {
    let routes = RoutesConfig {
        admin_prefix: "/".to_string(),
        ..Default::default()
    };
    assert_that!(routes.validate(), err(anything()));
}

#[test]
fn given_landing_path_inside_admin_area_when_validate_then_error() {
    let routes = RoutesConfig {
        landing_path: "/afxadmin/home".to_string(),
        ..Default::default()
    };
    assert_that!(routes.validate(), err(anything()));
}

#[test]
fn given_blank_admin_role_when_validate_then_error() {
    let routes = RoutesConfig {
        admin_role: "  ".to_string(),
        ..Default::default()
    };
    assert_that!(routes.validate(), err(anything()));
}
