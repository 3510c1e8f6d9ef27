// src/auth/google.rs
use std::time::Duration;

use serde::Deserialize;

use crate::errors::ServerError;

/// Exchanges a provider credential for a verified email address. The rest
/// of the site only ever sees the email string.
pub trait IdentityProvider {
    fn exchange(&self, credential: &str) -> Result<String, ServerError>;
}

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Google Identity Services verifier: sends the ID token to the tokeninfo
/// endpoint and checks the audience claim against our client id.
pub struct GoogleVerifier {
    client_id: String,
    endpoint: String,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: Option<String>,
    email: Option<String>,
    email_verified: Option<String>,
}

impl GoogleVerifier {
    pub fn new(client_id: impl Into<String>) -> Result<Self, ServerError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| ServerError::Fetch(e.to_string()))?;

        Ok(Self {
            client_id: client_id.into(),
            endpoint: TOKENINFO_URL.to_string(),
            http,
        })
    }
}

impl IdentityProvider for GoogleVerifier {
    fn exchange(&self, credential: &str) -> Result<String, ServerError> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(ServerError::BadRequest("missing credential".into()));
        }

        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[("id_token", credential)])
            .send()
            .map_err(|e| ServerError::Fetch(format!("tokeninfo request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(ServerError::Unauthorized("credential rejected".into()));
        }

        let info: TokenInfo = resp
            .json()
            .map_err(|e| ServerError::Fetch(format!("tokeninfo decode failed: {e}")))?;

        if info.aud.as_deref() != Some(self.client_id.as_str()) {
            return Err(ServerError::Unauthorized(
                "credential issued for another client".into(),
            ));
        }
        if info.email_verified.as_deref() != Some("true") {
            return Err(ServerError::Unauthorized("email not verified".into()));
        }

        normalize_email(info.email.as_deref().unwrap_or_default())
    }
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err(ServerError::BadRequest("invalid email".into()));
    }
    Ok(e)
}
