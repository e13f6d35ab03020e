//! Song info HTTP client
//!
//! Handles communication with the external song metadata service.
//! One request per lookup; failures are returned to the caller without retry.

use std::time::Duration;

use super::{adapter, dto};
use crate::enrichment::domain::{EnrichmentError, SongDetail};

/// User agent string sent with every lookup
const USER_AGENT: &str = concat!("SongCatalog/", env!("CARGO_PKG_VERSION"));

/// Song info API client
pub struct SongInfoClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SongInfoClient {
    /// Create a new client for the service at `base_url`.
    ///
    /// `timeout` bounds each request end to end; `None` waits indefinitely.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, EnrichmentError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| EnrichmentError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Look up the details of a song by group and title
    pub async fn get_song_details(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetail, EnrichmentError> {
        let response = self.send_info_request(group, song).await?;
        Ok(adapter::to_detail(response))
    }

    /// Send the HTTP request and parse the response
    async fn send_info_request(
        &self,
        group: &str,
        song: &str,
    ) -> Result<dto::SongInfoResponse, EnrichmentError> {
        let url = format!("{}/info", self.base_url);
        tracing::debug!(%url, group, song, "Requesting song details");

        let response = self
            .http_client
            .get(&url)
            .query(&[("group", group), ("song", song)])
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Status(status.as_u16()));
        }

        response
            .json::<dto::SongInfoResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}
