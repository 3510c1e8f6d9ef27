// src/config.rs
use std::env;

use tracing::info;

/// Runtime settings, read once at startup. Every value has a default so a
/// development instance runs with no environment at all.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub db_path: String,
    /// Base URL of the listings backend collaborator.
    pub backend_base_url: String,
    /// Host that serves uploaded media publicly.
    pub media_base_url: String,
    /// Path secret the backend requires on listing submissions.
    pub shared_secret: String,
    /// OAuth client id the Google credential must be issued for.
    pub google_client_id: String,
    pub session_ttl_secs: i64,
}

impl SiteConfig {
    pub fn load() -> Self {
        Self {
            bind_addr: env_or("REALTOR_BIND", "127.0.0.1:3000"),
            db_path: env_or("REALTOR_DB", "realtor.sqlite3"),
            backend_base_url: env_or("REALTOR_BACKEND_URL", "http://127.0.0.1:8080"),
            media_base_url: env_or("REALTOR_MEDIA_URL", "https://files.example.com"),
            shared_secret: env_or("REALTOR_SHARED_SECRET", "HowMuchDoesSecurityCost"),
            google_client_id: env_or("REALTOR_GOOGLE_CLIENT_ID", ""),
            session_ttl_secs: env_or("REALTOR_SESSION_TTL_SECS", "604800")
                .parse()
                .unwrap_or(604_800),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => {
            info!("{key} not set, using default");
            default.to_string()
        }
    }
}
