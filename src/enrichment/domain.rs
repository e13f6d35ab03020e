//! Internal domain models for song enrichment.
//!
//! These types are OUR types - they don't change when the metadata API changes.
//! Responses get converted into these types via the provider adapter.

/// Placeholder stored when the provider has no release date.
pub const FALLBACK_RELEASE_DATE: &str = "Unknown";

/// Placeholder stored when the provider has no text.
pub const FALLBACK_TEXT: &str = "No description available";

/// Placeholder stored when the provider has no link.
pub const FALLBACK_LINK: &str = "No link available";

/// Descriptive fields returned by the metadata provider.
///
/// Any field may be empty; [`SongDetail::with_fallbacks`] fills the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongDetail {
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl SongDetail {
    /// Replace every empty field with its placeholder.
    ///
    /// Non-empty fields are kept verbatim.
    pub fn with_fallbacks(mut self) -> Self {
        if self.text.is_empty() {
            tracing::warn!("Empty text field, using default");
            self.text = FALLBACK_TEXT.to_string();
        }
        if self.release_date.is_empty() {
            tracing::warn!("Empty release date, using default");
            self.release_date = FALLBACK_RELEASE_DATE.to_string();
        }
        if self.link.is_empty() {
            tracing::warn!("Empty link, using default");
            self.link = FALLBACK_LINK.to_string();
        }
        self
    }
}

/// Errors that can occur during enrichment
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Metadata service returned HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
