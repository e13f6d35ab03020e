//! Song enrichment - fetches descriptive metadata from an external service.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`songinfo/dto.rs`) - Exact API response shapes
//! - **Adapter** - Converts DTOs to domain models
//! - **Client** - HTTP client for the external API
//! - **Traits** - The injection seam used by the HTTP handlers
//!
//! # Usage
//!
//! ```ignore
//! use song_catalog::enrichment::SongInfoClient;
//!
//! let client = SongInfoClient::new("http://localhost:8081", None)?;
//! let detail = client.get_song_details("Muse", "Uprising").await?.with_fallbacks();
//! println!("Released: {}", detail.release_date);
//! ```

pub mod domain;
pub mod songinfo;
pub mod traits;

pub use domain::{
    EnrichmentError, FALLBACK_LINK, FALLBACK_RELEASE_DATE, FALLBACK_TEXT, SongDetail,
};
pub use songinfo::SongInfoClient;
pub use traits::SongInfoApi;
