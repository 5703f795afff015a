use crate::tests::{admin, loading, member, signed_out};
use crate::{Location, RedirectKind, RouteDecision, RoutePaths, require_auth};

use googletest::assert_that;
use googletest::prelude::{eq, some};

fn decide(session: &afx_session::Session, href: &str) -> RouteDecision {
    require_auth(session, &Location::parse(href), &RoutePaths::default())
}

#[test]
fn given_loading_when_any_path_then_loading_without_redirect() {
    for session in [loading(false), loading(true)] {
        for href in ["/dashboard", "/afxadmin/settings", "/"] {
            assert_that!(decide(&session, href), eq(&RouteDecision::Loading));
        }
    }
}

#[test]
fn given_signed_out_when_general_path_then_login_with_from() {
    let decision = decide(&signed_out(), "/orders?page=2");

    let redirect = decision.redirect().unwrap();
    assert_that!(redirect.kind, eq(RedirectKind::Login));
    assert_that!(redirect.to, eq("/login"));
    assert_that!(
        redirect.state.from,
        eq(&Some(Location::parse("/orders?page=2")))
    );
}

#[test]
fn given_signed_out_when_admin_path_then_admin_login() {
    let decision = decide(&signed_out(), "/afxadmin/users");

    let redirect = decision.redirect().unwrap();
    assert_that!(redirect.kind, eq(RedirectKind::AdminLogin));
    assert_that!(redirect.to, eq("/afxadmin/login"));
    assert_that!(
        redirect.state.from.as_ref().map(|l| l.pathname.as_str()),
        some(eq("/afxadmin/users"))
    );
}

#[test]
fn given_member_when_admin_path_then_admin_login_not_general_login() {
    let decision = decide(&member(), "/afxadmin/settings");

    assert!(!decision.is_render());
    assert_that!(decision.redirect_target(), some(eq("/afxadmin/login")));
    assert_that!(decision.redirect().unwrap().kind, eq(RedirectKind::AdminLogin));
}

#[test]
fn given_admin_when_admin_path_then_render() {
    assert_that!(decide(&admin(), "/afxadmin/settings"), eq(&RouteDecision::Render));
}

#[test]
fn given_member_when_general_path_then_render() {
    assert_that!(decide(&member(), "/dashboard"), eq(&RouteDecision::Render));
}

#[test]
fn given_admin_when_general_path_then_render() {
    assert_that!(decide(&admin(), "/tickets"), eq(&RouteDecision::Render));
}

#[test]
fn given_token_without_identity_when_admin_path_then_admin_login() {
    let mut session = admin();
    session.identity = None;

    let decision = decide(&session, "/afxadmin");

    assert_that!(decision.redirect_target(), some(eq("/afxadmin/login")));
}

#[test]
fn given_custom_role_name_when_identity_carries_it_then_render() {
    let paths = RoutePaths {
        admin_role: "ops".into(),
        ..RoutePaths::default()
    };
    let mut session = member();
    if let Some(identity) = session.identity.as_mut() {
        identity.role = afx_core::Role::from("ops");
    }

    let decision = require_auth(&session, &Location::new("/afxadmin/desk"), &paths);

    assert!(decision.is_render());
}
