//! Core data models for the song catalog.
//!
//! Defines the primary entity [`Song`] together with the request and filter
//! types that flow between the HTTP layer and the store.
//!
//! # Database Schema
//!
//! [`Song`] maps to the `songs` table. The `group` column is quoted in SQL
//! because `GROUP` is a reserved word.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::enrichment::SongDetail;

/// Default number of rows skipped by a list query.
pub const DEFAULT_OFFSET: i64 = 0;

/// Default page size of a list query.
pub const DEFAULT_LIMIT: i64 = 10;

/// A song in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Database ID (auto-generated)
    pub id: i64,
    /// Performing group or artist
    pub group: String,
    /// Song title
    pub song: String,
    /// Free-form release date as reported by the metadata service
    pub release_date: String,
    /// Lyrics or description
    pub text: String,
    /// External link
    pub link: String,
}

/// Body of a create request.
///
/// Only `group` and `song` are read. Other song fields may be present and
/// are ignored: the id is assigned by the store and the descriptive fields
/// always come from enrichment.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSong {
    pub group: String,
    pub song: String,
}

impl NewSong {
    /// Both required fields carry a non-blank value.
    pub fn is_complete(&self) -> bool {
        !self.group.trim().is_empty() && !self.song.trim().is_empty()
    }
}

/// A song ready to be inserted: request fields plus enrichment details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongDraft {
    pub group: String,
    pub song: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl SongDraft {
    /// Combine a create request with its (already defaulted) details.
    pub fn new(request: NewSong, details: SongDetail) -> Self {
        Self {
            group: request.group,
            song: request.song,
            release_date: details.release_date,
            text: details.text,
            link: details.link,
        }
    }

    /// Attach the store-assigned identifier.
    pub fn into_song(self, id: i64) -> Song {
        Song {
            id,
            group: self.group,
            song: self.song,
            release_date: self.release_date,
            text: self.text,
            link: self.link,
        }
    }
}

/// Filter applied by a list query.
///
/// `None` filters match every row; `Some` filters are exact, case-sensitive
/// matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongFilter {
    pub group: Option<String>,
    pub song: Option<String>,
    pub offset: i64,
    pub limit: i64,
}

impl Default for SongFilter {
    fn default() -> Self {
        Self {
            group: None,
            song: None,
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SongFilter {
    /// Restrict to an exact group name. Empty strings are treated as no filter.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into()).filter(|g: &String| !g.is_empty());
        self
    }

    /// Restrict to an exact song title. Empty strings are treated as no filter.
    pub fn song(mut self, song: impl Into<String>) -> Self {
        self.song = Some(song.into()).filter(|s: &String| !s.is_empty());
        self
    }

    pub fn page(mut self, offset: i64, limit: i64) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }
}

/// JSON error envelope: `{"error": "<message>"}`.
///
/// Also carries the delete success message to stay wire compatible with
/// existing clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
