// src/backend/client.rs
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use tracing::debug;

use crate::config::SiteConfig;
use crate::domain::listing::Listing;
use crate::errors::ServerError;

const USER_AGENT: &str = "realtor-site/0.1";

/// Blocking client for the external listings backend. Holds the shared
/// path secret the backend requires on writes; callers never see it.
#[derive(Clone)]
pub struct ListingsClient {
    http: Client,
    base_url: String,
    media_base_url: String,
    shared_secret: String,
}

impl ListingsClient {
    pub fn new(config: &SiteConfig) -> Result<Self, ServerError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ServerError::Fetch(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.backend_base_url.trim_end_matches('/').to_string(),
            media_base_url: config.media_base_url.trim_end_matches('/').to_string(),
            shared_secret: config.shared_secret.clone(),
        })
    }

    /// Every record the backend holds, soft-deleted ones included. Callers
    /// narrow with `domain::collection`.
    pub fn fetch_all(&self) -> Result<Vec<Listing>, ServerError> {
        let url = format!("{}/listings", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .map_err(|e| ServerError::Fetch(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ServerError::Fetch(format!(
                "GET /listings returned {}",
                resp.status()
            )));
        }

        resp.json().map_err(|e| ServerError::Fetch(e.to_string()))
    }

    /// The record for one MLS, if the backend knows it. The backend answers
    /// with an array of zero or one record.
    pub fn fetch_one(&self, mls: &str) -> Result<Option<Listing>, ServerError> {
        let url = format!("{}/listing/{}", self.base_url, mls);
        let resp = self
            .http
            .get(&url)
            .send()
            .map_err(|e| ServerError::Fetch(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ServerError::Fetch(format!(
                "GET /listing/{mls} returned {}",
                resp.status()
            )));
        }

        let cards: Vec<Listing> = resp.json().map_err(|e| ServerError::Fetch(e.to_string()))?;
        Ok(cards.into_iter().next())
    }

    /// Create-or-replace by MLS. Only the status is interpreted.
    pub fn submit(&self, listing: &Listing) -> Result<(), ServerError> {
        let url = format!("{}/listings/add/{}", self.base_url, self.shared_secret);
        let resp = self
            .http
            .post(&url)
            .json(listing)
            .send()
            .map_err(|e| ServerError::Fetch(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ServerError::Fetch(format!(
                "listing submission returned {}",
                resp.status()
            )));
        }

        debug!("submitted listing {}", listing.mls);
        Ok(())
    }

    /// Uploads one image for `user` and returns its public URL.
    pub fn upload_image(
        &self,
        user: &str,
        filename: &str,
        content_type: &mime::Mime,
        bytes: Vec<u8>,
    ) -> Result<String, ServerError> {
        let url = format!("{}/upload/image/{}", self.base_url, user);
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type.essence_str())
            .map_err(|e| ServerError::Fetch(e.to_string()))?;
        let form = Form::new().part("file", part);

        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| ServerError::Fetch(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ServerError::Fetch(format!(
                "image upload returned {}",
                resp.status()
            )));
        }

        Ok(self.public_media_url(user, filename))
    }

    /// Where the image host serves an upload from: `/media/{user}/{file}`.
    pub fn public_media_url(&self, user: &str, filename: &str) -> String {
        format!("{}/media/{}/{}", self.media_base_url, user, filename)
    }
}
