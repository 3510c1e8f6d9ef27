// src/tests/utils.rs
use std::io::Read;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::{Body, Request, Response};
use http::Method;

use crate::auth::google::IdentityProvider;
use crate::config::SiteConfig;
use crate::db::connection::init_db;
use crate::db::Database;
use crate::errors::ServerError;
use crate::router::App;

/// Identity provider that accepts any credential as the configured email.
pub struct StaticIdentity(pub String);

impl IdentityProvider for StaticIdentity {
    fn exchange(&self, _credential: &str) -> Result<String, ServerError> {
        Ok(self.0.clone())
    }
}

/// Backend URL points at the discard port, so fetches fail fast and the
/// degradation paths get exercised.
pub fn test_config() -> SiteConfig {
    SiteConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        db_path: ":memory:".to_string(),
        backend_base_url: "http://127.0.0.1:9".to_string(),
        media_base_url: "https://files.example.com".to_string(),
        shared_secret: "test-secret".to_string(),
        google_client_id: "test-client".to_string(),
        session_ttl_secs: 3600,
    }
}

/// Fresh database using the production schema.
pub fn make_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "realtor_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql").expect("failed to initialize test db");
    db
}

pub fn test_app(db: Database, email: &str) -> App {
    App::new(db, test_config(), Arc::new(StaticIdentity(email.to_string()))).unwrap()
}

pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn post(path: &str, body: &str) -> Request {
    let mut req = Request::new(Body::new(body.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = path.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn with_cookie(mut req: Request, token: &str) -> Request {
    req.headers_mut()
        .insert("Cookie", format!("session={token}").parse().unwrap());
    req
}

/// Signs in through the full /auth/google route and returns the raw
/// session token from the Set-Cookie header.
pub fn sign_in(app: &App) -> String {
    let resp = crate::router::handle(post("/auth/google", "credential=stub"), app).unwrap();
    assert_eq!(resp.status(), 302);

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .expect("sign-in should set the session cookie");
    cookie
        .strip_prefix("session=")
        .and_then(|rest| rest.split(';').next())
        .expect("cookie should carry the raw token")
        .to_string()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

/// urlencoded body from (name, value) pairs.
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        ser.append_pair(k, v);
    }
    ser.finish()
}
