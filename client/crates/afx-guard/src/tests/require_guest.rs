use crate::tests::{admin, loading, member, signed_out};
use crate::{Location, LocationState, RedirectKind, RouteDecision, RoutePaths, require_guest};

use afx_session::Session;

use googletest::assert_that;
use googletest::prelude::{eq, some};

fn decide(session: &Session, from: Option<&str>) -> RouteDecision {
    let state = LocationState {
        from: from.map(Location::parse),
    };
    require_guest(session, &state, &RoutePaths::default())
}

#[test]
fn given_loading_when_guest_page_then_loading_without_redirect() {
    for session in [loading(false), loading(true)] {
        assert_that!(decide(&session, Some("/orders")), eq(&RouteDecision::Loading));
        assert_that!(decide(&session, None), eq(&RouteDecision::Loading));
    }
}

#[test]
fn given_signed_out_without_from_when_guest_page_then_render() {
    assert_that!(decide(&signed_out(), None), eq(&RouteDecision::Render));
}

#[test]
fn given_signed_out_with_from_when_guest_page_then_render() {
    assert_that!(decide(&signed_out(), Some("/orders")), eq(&RouteDecision::Render));
}

#[test]
fn given_signed_in_without_from_when_guest_page_then_landing() {
    let decision = decide(&member(), None);

    let redirect = decision.redirect().unwrap();
    assert_that!(redirect.kind, eq(RedirectKind::ReturnTo));
    assert_that!(redirect.to, eq("/dashboard"));
    assert_that!(redirect.state, eq(&LocationState::default()));
}

#[test]
fn given_signed_in_with_from_when_guest_page_then_back_to_from_with_query() {
    let decision = decide(&member(), Some("/orders?page=3"));

    assert_that!(decision.redirect_target(), some(eq("/orders?page=3")));
}

#[test]
fn given_from_is_login_page_when_signed_in_then_landing() {
    assert_that!(decide(&member(), Some("/login")).redirect_target(), some(eq("/dashboard")));
    assert_that!(
        decide(&admin(), Some("/afxadmin/login")).redirect_target(),
        some(eq("/dashboard"))
    );
}

#[test]
fn given_member_with_admin_from_when_signed_in_then_landing() {
    let decision = decide(&member(), Some("/afxadmin/settings"));

    assert_that!(decision.redirect_target(), some(eq("/dashboard")));
}

#[test]
fn given_admin_with_admin_from_when_signed_in_then_back_to_admin_area() {
    let decision = decide(&admin(), Some("/afxadmin/settings"));

    assert_that!(decision.redirect_target(), some(eq("/afxadmin/settings")));
}

#[test]
fn given_from_outside_the_app_when_signed_in_then_landing() {
    for from in [
        "//evil.example/phish",
        "https://evil.example/phish",
        "/\\evil.example",
        "evil.example",
    ] {
        assert_that!(
            decide(&member(), Some(from)).redirect_target(),
            some(eq("/dashboard"))
        );
    }
}
