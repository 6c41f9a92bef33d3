//! YouTube Data API v3 client implementation.
//!
//! Handles API key authentication and the HTTP side of `channels.list` and
//! `search.list`.

use crate::config::Config;
use crate::youtube::api::{ChannelListRequest, SearchRequest, YouTubeApi};
use crate::youtube::error::{Result, YouTubeError};
use crate::youtube::models::{ChannelListResponse, SearchListResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const YOUTUBE_API_SERVICE_NAME: &str = "youtube";
pub const YOUTUBE_API_VERSION: &str = "v3";

/// YouTube Data API v3 client.
///
/// Holds the authenticated HTTP handle. Cheap to clone and safe to reuse
/// across calls.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Base URL for YouTube Data API
    base_url: String,
}

impl YouTubeClient {
    /// Create a new YouTube client from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `Result<YouTubeClient>` - New client or error
    ///
    /// # Details
    /// Fails with [`YouTubeError::MissingApiKey`] when no key is configured.
    /// No request is sent here.
    pub fn new(config: &Config) -> Result<Self> {
        if !config.has_api_key() {
            return Err(YouTubeError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(default_base_url)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET against `{base_url}/{endpoint}` and decode the JSON body.
    ///
    /// Non-success statuses become [`YouTubeError::Http`] carrying the body.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&'static str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, ?params, "YouTube API request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", &self.api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(YouTubeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| YouTubeError::Parse { endpoint, source })
    }
}

impl YouTubeApi for YouTubeClient {
    async fn list_channels(&self, request: &ChannelListRequest) -> Result<ChannelListResponse> {
        let params = [("part", request.part.clone()), ("id", request.id.clone())];
        self.get("channels", &params).await
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchListResponse> {
        self.get("search", &request.query_params()).await
    }
}

fn default_base_url() -> String {
    format!(
        "https://www.googleapis.com/{}/{}",
        YOUTUBE_API_SERVICE_NAME, YOUTUBE_API_VERSION
    )
}
