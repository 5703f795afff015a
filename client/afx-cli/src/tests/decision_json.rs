use crate::decision_json;

use afx_guard::{Location, LocationState, Redirect, RedirectKind, RouteDecision};

use googletest::assert_that;
use googletest::prelude::eq;
use serde_json::json;

#[test]
fn given_render_when_rendered_then_decision_only() {
    assert_that!(
        decision_json(&RouteDecision::Render),
        eq(&json!({ "decision": "render" }))
    );
}

#[test]
fn given_loading_when_rendered_then_loading() {
    assert_that!(
        decision_json(&RouteDecision::Loading),
        eq(&json!({ "decision": "loading" }))
    );
}

#[test]
fn given_login_redirect_when_rendered_then_target_and_from() {
    let decision = RouteDecision::Redirect(Redirect {
        kind: RedirectKind::AdminLogin,
        to: "/afxadmin/login".into(),
        state: LocationState::from_location(Location::parse("/afxadmin/settings?tab=2")),
    });

    assert_that!(
        decision_json(&decision),
        eq(&json!({
            "decision": "redirect",
            "kind": "admin_login",
            "to": "/afxadmin/login",
            "from": "/afxadmin/settings?tab=2",
        }))
    );
}

#[test]
fn given_return_redirect_when_rendered_then_null_from() {
    let decision = RouteDecision::Redirect(Redirect {
        kind: RedirectKind::ReturnTo,
        to: "/dashboard".into(),
        state: LocationState::default(),
    });

    let value = decision_json(&decision);

    assert_that!(value["kind"], eq(&json!("return_to")));
    assert!(value["from"].is_null());
}
