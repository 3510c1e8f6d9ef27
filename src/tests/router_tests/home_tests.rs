// src/tests/router_tests/home_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db, test_app};

#[test]
fn home_renders_an_empty_deck_when_the_backend_is_unreachable() {
    let app = test_app(make_db(), "test@example.com");

    let mut resp = handle(get("/realtor"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("tile-deck"));
    // No tiles: every tile carries a data-mls attribute.
    assert!(!body.contains("data-mls"));
}

#[test]
fn root_redirects_to_the_realtor_page() {
    let app = test_app(make_db(), "test@example.com");

    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/realtor");
}

#[test]
fn unknown_routes_are_not_found() {
    let app = test_app(make_db(), "test@example.com");

    match handle(get("/definitely/not/a/route"), &app) {
        Err(ServerError::NotFound) => {}
        Err(other) => panic!("expected NotFound, got: {other:?}"),
        Ok(_) => panic!("expected NotFound, got a response"),
    }
}

#[test]
fn stylesheet_is_served() {
    let app = test_app(make_db(), "test@example.com");

    let resp = handle(get("/static/main.css"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let ct = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("text/css"));
}

#[test]
fn listing_detail_requires_an_mls_parameter() {
    let app = test_app(make_db(), "test@example.com");

    match handle(get("/realtor/listing"), &app) {
        Err(ServerError::BadRequest(_)) => {}
        Err(other) => panic!("expected BadRequest, got: {other:?}"),
        Ok(_) => panic!("expected BadRequest, got a response"),
    }
}
