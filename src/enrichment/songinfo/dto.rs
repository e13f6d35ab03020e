//! Song info API Data Transfer Objects
//!
//! These types match EXACTLY what the `/info` endpoint returns.
//! DO NOT use these types outside the songinfo module - convert to domain types.

use serde::{Deserialize, Serialize};

/// Response of `GET /info?group=..&song=..`
///
/// The service omits fields it knows nothing about, so every field defaults
/// to an empty string.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SongInfoResponse {
    /// Free-form release date (e.g. "16.07.2006")
    pub release_date: String,
    /// Lyrics, verses separated by blank lines
    pub text: String,
    /// Link to the song page or video
    pub link: String,
}
