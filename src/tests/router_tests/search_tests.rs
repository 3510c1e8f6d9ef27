// src/tests/router_tests/search_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db, test_app};

#[test]
fn search_page_renders_the_form() {
    let app = test_app(make_db(), "test@example.com");

    let mut resp = handle(get("/realtor/search"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    for field in ["City", "State", "ZipCode", "Bedrooms", "Bathrooms", "MLS", "SquareFeet"] {
        assert!(body.contains(&format!("name=\"{field}\"")), "missing {field}");
    }
}

#[test]
fn search_form_echoes_the_submitted_query() {
    let app = test_app(make_db(), "test@example.com");

    let mut resp = handle(get("/realtor/search?City=Bend&Bedrooms=3"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("value=\"Bend\""));
    assert!(body.contains("value=\"3\""));
}

#[test]
fn search_degrades_to_an_empty_deck_when_the_backend_is_unreachable() {
    let app = test_app(make_db(), "test@example.com");

    let mut resp = handle(get("/realtor/search?City=Bend"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(!body.contains("data-mls"));
}
