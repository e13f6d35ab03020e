//! Test utilities and fixtures for song-catalog tests.
//!
//! This module provides common test helpers, fake stores, and database
//! utilities to reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use song_catalog::test_utils::{temp_db, mock_draft};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let (pool, _dir) = temp_db().await;
//!     let song = db::create_song(&pool, &mock_draft("Muse", "Uprising")).await?;
//! }
//! ```

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use tempfile::TempDir;

use crate::db::SongStore;
use crate::error::Result;
use crate::model::{Song, SongDraft, SongFilter};

/// Creates a temporary database for testing.
///
/// The database is created in a temporary directory that is automatically
/// cleaned up when the returned `TempDir` is dropped. Migrations are run
/// automatically.
///
/// Keep the TempDir alive for the duration of your test.
pub async fn temp_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db");
    let db_url = format!("sqlite:{}", db_path.display());

    let pool = crate::db::init_db(&db_url, 2)
        .await
        .expect("Failed to initialize test database");

    (pool, dir)
}

/// Creates a draft with fixed descriptive fields.
pub fn mock_draft(group: &str, song: &str) -> SongDraft {
    SongDraft {
        group: group.to_string(),
        song: song.to_string(),
        release_date: "2009".to_string(),
        text: "Paranoia is in bloom".to_string(),
        link: "https://example.com/song".to_string(),
    }
}

/// In-memory [`SongStore`] with call counters and switchable failures.
#[derive(Default)]
pub struct MemorySongStore {
    songs: Mutex<Vec<Song>>,
    next_id: AtomicUsize,
    creates: AtomicUsize,
    deletes: AtomicUsize,
    fail_reads: bool,
    fail_writes: bool,
    fail_deletes: bool,
}

impl MemorySongStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given songs (IDs assigned in order).
    pub fn with_songs(drafts: &[SongDraft]) -> Self {
        let store = Self::new();
        {
            let mut songs = store.songs.lock().unwrap();
            for draft in drafts {
                let id = store.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
                songs.push(draft.clone().into_song(id));
            }
        }
        store
    }

    /// Every query and lookup fails.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every insert fails.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Every delete fails.
    pub fn failing_deletes(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    /// Snapshot of the stored songs.
    pub fn songs(&self) -> Vec<Song> {
        self.songs.lock().unwrap().clone()
    }

    /// Number of insert attempts.
    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    /// Number of delete attempts.
    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SongStore for MemorySongStore {
    async fn find_songs(&self, filter: &SongFilter) -> Result<Vec<Song>> {
        if self.fail_reads {
            return Err(sqlx::Error::PoolClosed.into());
        }
        let songs = self.songs.lock().unwrap();
        Ok(songs
            .iter()
            .filter(|s| filter.group.as_ref().is_none_or(|g| &s.group == g))
            .filter(|s| filter.song.as_ref().is_none_or(|t| &s.song == t))
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .cloned()
            .collect())
    }

    async fn find_song_by_id(&self, id: i64) -> Result<Option<Song>> {
        if self.fail_reads {
            return Err(sqlx::Error::PoolClosed.into());
        }
        let songs = self.songs.lock().unwrap();
        Ok(songs.iter().find(|s| s.id == id).cloned())
    }

    async fn create_song(&self, draft: &SongDraft) -> Result<Song> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(sqlx::Error::PoolClosed.into());
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let song = draft.clone().into_song(id);
        self.songs.lock().unwrap().push(song.clone());
        Ok(song)
    }

    async fn delete_song(&self, id: i64) -> Result<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_deletes {
            return Err(sqlx::Error::PoolClosed.into());
        }
        self.songs.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }
}
