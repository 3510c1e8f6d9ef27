// src/auth/session.rs
use crate::auth::token;
use crate::db::{sessions, Database};
use crate::errors::ServerError;

/// Name of the cookie carrying the raw session token. This cookie and the
/// sessions table are the only durable state the site itself writes.
pub const SESSION_COOKIE: &str = "session";

/// Who the current request is, as far as the site is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    SignedOut,
    SignedIn { email: String },
}

impl SessionState {
    pub fn email(&self) -> Option<&str> {
        match self {
            SessionState::SignedIn { email } => Some(email),
            SessionState::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn { .. })
    }
}

/// Opens a session for `email` and returns the raw cookie token.
pub fn sign_in(db: &Database, email: &str, now: i64, ttl_secs: i64) -> Result<String, ServerError> {
    let raw = token::generate();
    let hash = token::hash(&raw);
    db.with_conn(|conn| sessions::insert_session(conn, email, &hash, now, now + ttl_secs))?;
    Ok(raw)
}

/// Resolves a raw cookie token to the session it names, if still live.
/// No token at all is simply `SignedOut`.
pub fn resolve(
    db: &Database,
    raw_token: Option<&str>,
    now: i64,
) -> Result<SessionState, ServerError> {
    let Some(raw) = raw_token else {
        return Ok(SessionState::SignedOut);
    };

    let hash = token::hash(raw);
    let email = db.with_conn(|conn| sessions::find_session_email(conn, &hash, now))?;
    Ok(match email {
        Some(email) => SessionState::SignedIn { email },
        None => SessionState::SignedOut,
    })
}

/// Revokes the session named by the cookie token. Unknown tokens no-op so
/// sign-out can't fail from a stale cookie.
pub fn sign_out(db: &Database, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = token::hash(raw_token);
    db.with_conn(|conn| sessions::revoke_session(conn, &hash, now))
}

/// Value of a named cookie in a `Cookie:` request header.
pub fn cookie_value<'a>(header: Option<&'a str>, name: &str) -> Option<&'a str> {
    let header = header?;
    header.split(';').map(str::trim).find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == name).then_some(v)
    })
}
