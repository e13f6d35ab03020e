//! Trait definitions for the metadata API client.
//!
//! The trait enables dependency injection and mocking for tests.
//! Production code uses [`SongInfoClient`](super::songinfo::SongInfoClient),
//! while tests substitute [`mocks::MockSongInfo`].
//!
//! # Example
//!
//! ```ignore
//! use song_catalog::enrichment::SongInfoApi;
//!
//! async fn describe(api: &dyn SongInfoApi) -> Result<SongDetail, EnrichmentError> {
//!     api.get_song_details("Muse", "Uprising").await
//! }
//! ```

use async_trait::async_trait;

use super::domain::{EnrichmentError, SongDetail};

/// Trait for song detail lookup.
#[async_trait]
pub trait SongInfoApi: Send + Sync {
    /// Look up descriptive fields for a `(group, song)` pair.
    ///
    /// Fields the provider does not supply are empty strings.
    async fn get_song_details(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetail, EnrichmentError>;
}

#[async_trait]
impl SongInfoApi for super::songinfo::SongInfoClient {
    async fn get_song_details(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetail, EnrichmentError> {
        self.get_song_details(group, song).await
    }
}
