//! Converts song info DTOs into domain types.

use super::dto::SongInfoResponse;
use crate::enrichment::domain::SongDetail;

/// Convert an `/info` response into a [`SongDetail`].
///
/// Values are passed through untouched; placeholder substitution happens in
/// the caller.
pub fn to_detail(response: SongInfoResponse) -> SongDetail {
    SongDetail {
        release_date: response.release_date,
        text: response.text,
        link: response.link,
    }
}
