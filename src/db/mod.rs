//! Database module for song persistence.
//!
//! Uses SQLx with SQLite for lightweight, embedded database storage.
//! Provides async operations for:
//! - Filtered, paginated song listing
//! - Single-song lookup by ID
//! - Song insertion and deletion
//!
//! Handlers never touch the pool directly; they go through the
//! [`SongStore`] port so tests can substitute an in-memory store.
//!
//! # Example
//!
//! ```ignore
//! use song_catalog::db::{init_db, find_songs};
//! use song_catalog::model::SongFilter;
//!
//! let pool = init_db("sqlite:songs.db", 5).await?;
//! let songs = find_songs(&pool, &SongFilter::default().group("Muse")).await?;
//! ```

use async_trait::async_trait;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::error::Result;
use crate::model::{Song, SongDraft, SongFilter};

/// Default database filename.
pub const DEFAULT_DB_NAME: &str = "song_catalog.db";

/// Default maximum number of pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Build a SQLite database URL from an optional path.
///
/// If no path is provided, uses [`DEFAULT_DB_NAME`] in the current directory.
pub fn db_url(path: Option<&std::path::Path>) -> String {
    match path {
        Some(p) => format!("sqlite:{}", p.display()),
        None => format!("sqlite:{}", DEFAULT_DB_NAME),
    }
}

/// Initialize the database connection pool and run migrations.
///
/// Creates the database file if it doesn't exist, establishes a connection
/// pool with up to `max_connections` connections, and runs all pending
/// migrations.
///
/// # Errors
///
/// Returns an error if:
/// - Database creation fails
/// - Connection cannot be established
/// - Migration fails
pub async fn init_db(db_url: &str, max_connections: u32) -> Result<SqlitePool> {
    if !sqlx::Sqlite::database_exists(db_url).await.unwrap_or(false) {
        sqlx::Sqlite::create_database(db_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(db_url)
        .await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(sqlx::Error::from)?;

    Ok(pool)
}

/// Find songs matching a filter.
///
/// Group and title filters are exact, case-sensitive matches. Rows come back
/// in store order, after skipping `filter.offset` rows and capped at
/// `filter.limit`.
pub async fn find_songs(pool: &SqlitePool, filter: &SongFilter) -> sqlx::Result<Vec<Song>> {
    sqlx::query_as::<_, Song>(
        r#"
        SELECT id, "group", song, release_date, text, link
        FROM songs
        WHERE (? IS NULL OR "group" = ?)
          AND (? IS NULL OR song = ?)
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(&filter.group)
    .bind(&filter.group)
    .bind(&filter.song)
    .bind(&filter.song)
    .bind(filter.limit)
    .bind(filter.offset)
    .fetch_all(pool)
    .await
}

/// Get a song by its database ID.
///
/// # Returns
///
/// The song if found, or None.
pub async fn find_song_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Song>> {
    sqlx::query_as::<_, Song>(
        r#"SELECT id, "group", song, release_date, text, link FROM songs WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a song and return it with its store-assigned ID.
pub async fn create_song(pool: &SqlitePool, draft: &SongDraft) -> sqlx::Result<Song> {
    sqlx::query_as::<_, Song>(
        r#"
        INSERT INTO songs ("group", song, release_date, text, link)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, "group", song, release_date, text, link
        "#,
    )
    .bind(&draft.group)
    .bind(&draft.song)
    .bind(&draft.release_date)
    .bind(&draft.text)
    .bind(&draft.link)
    .fetch_one(pool)
    .await
}

/// Delete a song by ID.
///
/// Deleting an ID that no longer exists is not an error.
pub async fn delete_song(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Persistence port used by the HTTP handlers.
#[async_trait]
pub trait SongStore: Send + Sync {
    async fn find_songs(&self, filter: &SongFilter) -> Result<Vec<Song>>;

    async fn find_song_by_id(&self, id: i64) -> Result<Option<Song>>;

    async fn create_song(&self, draft: &SongDraft) -> Result<Song>;

    async fn delete_song(&self, id: i64) -> Result<()>;
}

/// [`SongStore`] backed by a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteSongStore {
    pool: SqlitePool,
}

impl SqliteSongStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection, waiting for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SongStore for SqliteSongStore {
    async fn find_songs(&self, filter: &SongFilter) -> Result<Vec<Song>> {
        Ok(find_songs(&self.pool, filter).await?)
    }

    async fn find_song_by_id(&self, id: i64) -> Result<Option<Song>> {
        Ok(find_song_by_id(&self.pool, id).await?)
    }

    async fn create_song(&self, draft: &SongDraft) -> Result<Song> {
        Ok(create_song(&self.pool, draft).await?)
    }

    async fn delete_song(&self, id: i64) -> Result<()> {
        Ok(delete_song(&self.pool, id).await?)
    }
}
