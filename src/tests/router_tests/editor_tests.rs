// src/tests/router_tests/editor_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, form_body, make_db, post, sign_in, test_app, with_cookie};

fn save_body(overrides: &[(&str, &str)]) -> String {
    let mut pairs = vec![
        ("Address", "123 Real Avenue"),
        ("Address2", "Apt. 56"),
        ("City", "Bend"),
        ("State", "OR"),
        ("ZipCode", "97701"),
        ("Price", "503,000"),
        ("Neighborhood", "Old Mill"),
        ("Bedrooms", "3"),
        ("Bathrooms", "1"),
        ("SquareFeet", "1200"),
        ("LotSize", "1600"),
        ("GarageSize", "2"),
        ("Description", "A lovely home."),
        ("action", "save"),
    ];
    for &(k, v) in overrides {
        if let Some(pair) = pairs.iter_mut().find(|(name, _)| *name == k) {
            pair.1 = v;
        }
    }
    form_body(&pairs)
}

#[test]
fn saving_without_a_session_is_unauthorized() {
    let app = test_app(make_db(), "owner@example.com");

    match handle(post("/realtor/my-listing", &save_body(&[])), &app) {
        Err(ServerError::Unauthorized(_)) => {}
        Err(other) => panic!("expected Unauthorized, got: {other:?}"),
        Ok(_) => panic!("expected Unauthorized, got a response"),
    }
}

#[test]
fn blank_description_surfaces_the_field_name_without_a_backend_call() {
    let app = test_app(make_db(), "owner@example.com");
    let token = sign_in(&app);

    let req = with_cookie(
        post("/realtor/my-listing", &save_body(&[("Description", "")])),
        &token,
    );

    // A Validation error, not a Fetch error: the unreachable backend was
    // never contacted.
    match handle(req, &app) {
        Err(ServerError::Validation(field)) => assert_eq!(field, "Description"),
        Err(other) => panic!("expected Validation, got: {other:?}"),
        Ok(_) => panic!("expected Validation, got a response"),
    }
}

#[test]
fn a_complete_form_reaches_the_backend() {
    let app = test_app(make_db(), "owner@example.com");
    let token = sign_in(&app);

    let req = with_cookie(post("/realtor/my-listing", &save_body(&[])), &token);

    // Validation passed; the submission then fails against the unreachable
    // test backend.
    match handle(req, &app) {
        Err(ServerError::Fetch(_)) => {}
        Err(other) => panic!("expected Fetch, got: {other:?}"),
        Ok(_) => panic!("expected Fetch, got a response"),
    }
}

#[test]
fn attaching_a_photo_round_trips_the_draft() {
    let app = test_app(make_db(), "owner@example.com");
    let token = sign_in(&app);

    let body = form_body(&[
        ("Address", "123 Real Avenue"),
        ("City", "Bend"),
        ("PhotoUrl", "https://files.example.com/media/owner@example.com/a.jpg"),
        ("action", "attach-photo"),
    ]);
    let mut resp = handle(with_cookie(post("/realtor/my-listing", &body), &token), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let page = body_string(&mut resp);
    // The draft keeps the typed fields and now carries the photo as a
    // hidden input for the next round trip.
    assert!(page.contains("123 Real Avenue"));
    assert!(page.contains("name=\"Photo\""));
    assert!(page.contains("media/owner@example.com/a.jpg"));
}

#[test]
fn removing_a_photo_drops_it_from_the_draft() {
    let app = test_app(make_db(), "owner@example.com");
    let token = sign_in(&app);

    let body = form_body(&[
        ("Photo", "https://x/1.jpg"),
        ("Photo", "https://x/2.jpg"),
        ("action", "remove-photo:https://x/1.jpg"),
    ]);
    let mut resp = handle(with_cookie(post("/realtor/my-listing", &body), &token), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let page = body_string(&mut resp);
    assert!(!page.contains("https://x/1.jpg"));
    assert!(page.contains("https://x/2.jpg"));
}

#[test]
fn upload_rejects_non_image_content() {
    let app = test_app(make_db(), "owner@example.com");
    let token = sign_in(&app);

    let mut req = post("/realtor/upload?filename=notes.txt", "hello");
    req.headers_mut()
        .insert("Content-Type", "text/plain".parse().unwrap());

    match handle(with_cookie(req, &token), &app) {
        Err(ServerError::BadRequest(_)) => {}
        Err(other) => panic!("expected BadRequest, got: {other:?}"),
        Ok(_) => panic!("expected BadRequest, got a response"),
    }
}

#[test]
fn upload_requires_a_session() {
    let app = test_app(make_db(), "owner@example.com");

    match handle(post("/realtor/upload?filename=a.jpg", "bytes"), &app) {
        Err(ServerError::Unauthorized(_)) => {}
        Err(other) => panic!("expected Unauthorized, got: {other:?}"),
        Ok(_) => panic!("expected Unauthorized, got a response"),
    }
}
