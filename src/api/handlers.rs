//! Song request handlers.
//!
//! Each handler runs validate → fetch/enrich → persist → respond and returns
//! at the first failure.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::{debug, error, info};

use super::{ApiError, AppState};
use crate::model::{
    DEFAULT_LIMIT, DEFAULT_OFFSET, ErrorResponse, NewSong, Song, SongDraft, SongFilter,
};

/// Message returned by a successful delete
pub const DELETED_MESSAGE: &str = "Song deleted successfully";

/// Query string of `GET /songs`.
///
/// `skip` and `limit` stay strings here so malformed values map to our own
/// 400 instead of the extractor's rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub group: Option<String>,
    pub song: Option<String>,
    pub skip: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    /// Convert into a store filter, validating pagination.
    pub fn into_filter(self) -> Result<SongFilter, ApiError> {
        let offset = parse_page_value(self.skip.as_deref(), DEFAULT_OFFSET)?;
        let limit = parse_page_value(self.limit.as_deref(), DEFAULT_LIMIT)?;
        Ok(SongFilter::default()
            .group(self.group.unwrap_or_default())
            .song(self.song.unwrap_or_default())
            .page(offset, limit))
    }
}

/// Parse a non-negative pagination value; absent or empty means `default`.
fn parse_page_value(value: Option<&str>, default: i64) -> Result<i64, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => match raw.parse::<i64>() {
            Ok(n) if n >= 0 => Ok(n),
            _ => Err(ApiError::InvalidPagination),
        },
    }
}

/// `GET /songs`
pub async fn list_songs(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Song>>, ApiError> {
    info!("Starting to fetch songs");

    let Query(params) = query.map_err(|e| {
        error!("Query string binding failed: {}", e);
        ApiError::InvalidInput
    })?;

    let filter = params.into_filter().inspect_err(|_| {
        error!("Rejected non-numeric or negative skip/limit");
    })?;
    debug!(
        group = ?filter.group,
        song = ?filter.song,
        offset = filter.offset,
        limit = filter.limit,
        "List filters"
    );

    let songs = state.store.find_songs(&filter).await.map_err(|e| {
        error!("Failed to fetch songs: {}", e);
        ApiError::Database
    })?;

    info!("Successfully fetched {} songs", songs.len());
    Ok(Json(songs))
}

/// `POST /songs`
pub async fn create_song(
    State(state): State<AppState>,
    payload: Result<Json<NewSong>, JsonRejection>,
) -> Result<(StatusCode, Json<Song>), ApiError> {
    info!("Starting to create new song");

    let Json(new_song) = payload.map_err(|e| {
        error!("JSON binding failed: {}", e);
        ApiError::InvalidInput
    })?;
    if !new_song.is_complete() {
        error!("Missing group or song in request body");
        return Err(ApiError::InvalidInput);
    }
    debug!(group = %new_song.group, song = %new_song.song, "Received song data");

    let details = state
        .enrichment
        .get_song_details(&new_song.group, &new_song.song)
        .await
        .map_err(|e| {
            error!("Song details lookup failed: {}", e);
            ApiError::Upstream
        })?;
    debug!(?details, "Song details response");

    let draft = SongDraft::new(new_song, details.with_fallbacks());
    debug!(?draft, "Final song data before save");

    let song = state.store.create_song(&draft).await.map_err(|e| {
        error!("Database save failed: {}", e);
        ApiError::SaveFailed
    })?;

    info!("Successfully created song with ID: {}", song.id);
    Ok((StatusCode::CREATED, Json(song)))
}

/// `DELETE /songs/{id}`
///
/// The success body keeps the `{"error": ...}` envelope that existing
/// clients expect.
pub async fn delete_song(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ErrorResponse>, ApiError> {
    let Path(id) = path.map_err(|e| {
        error!("Song not found: unreadable ID: {}", e);
        ApiError::NotFound
    })?;
    info!("Starting to delete song with ID: {}", id);

    let Ok(song_id) = id.parse::<i64>() else {
        error!("Song not found: malformed ID {:?}", id);
        return Err(ApiError::NotFound);
    };

    let song = match state.store.find_song_by_id(song_id).await {
        Ok(Some(song)) => song,
        Ok(None) => {
            error!("Song not found: no row with ID {}", song_id);
            return Err(ApiError::NotFound);
        }
        Err(e) => {
            error!("Song not found: {}", e);
            return Err(ApiError::NotFound);
        }
    };
    debug!(?song, "Found song to delete");

    state.store.delete_song(song.id).await.map_err(|e| {
        error!("Delete operation failed: {}", e);
        ApiError::DeleteFailed
    })?;

    info!("Successfully deleted song with ID: {}", song_id);
    Ok(Json(ErrorResponse::new(DELETED_MESSAGE)))
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
