// src/tests/router_tests/auth_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db, sign_in, test_app, with_cookie};

#[test]
fn google_sign_in_sets_a_cookie_and_personalizes_pages() {
    let app = test_app(make_db(), "owner@example.com");

    let token = sign_in(&app);

    // The backend is unreachable, so the owner sees the empty state, but
    // the page is personalized from the session.
    let mut resp = handle(with_cookie(get("/realtor/my-listings"), &token), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("owner@example.com"));
    assert!(body.contains("You have no properties listed with us."));
}

#[test]
fn my_listings_prompts_signed_out_visitors() {
    let app = test_app(make_db(), "owner@example.com");

    let mut resp = handle(get("/realtor/my-listings"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Please sign in above to see your listed properties."));
}

#[test]
fn editor_prompts_signed_out_visitors() {
    let app = test_app(make_db(), "owner@example.com");

    let mut resp = handle(get("/realtor/new"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Please sign in above to list your property."));
}

#[test]
fn sign_out_revokes_the_session_and_clears_the_cookie() {
    let app = test_app(make_db(), "owner@example.com");
    let token = sign_in(&app);

    let resp = handle(with_cookie(get("/auth/signout"), &token), &app).unwrap();
    assert_eq!(resp.status(), 302);
    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(cookie.contains("Max-Age=0"));

    // The old token no longer signs anyone in.
    let mut resp = handle(with_cookie(get("/realtor/my-listings"), &token), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Please sign in above to see your listed properties."));
}

#[test]
fn signed_in_login_page_redirects_home() {
    let app = test_app(make_db(), "owner@example.com");
    let token = sign_in(&app);

    let resp = handle(with_cookie(get("/login"), &token), &app).unwrap();
    assert_eq!(resp.status(), 302);
}
