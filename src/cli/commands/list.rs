//! Catalog listing command.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::db;
use crate::model::SongFilter;

/// Print songs matching the filters, one per line
pub fn cmd_list(
    rt: &Runtime,
    config: &Config,
    group: Option<&str>,
    song: Option<&str>,
    skip: u32,
    limit: u32,
) -> anyhow::Result<()> {
    rt.block_on(async {
        let pool = db::init_db(&config.database.url, config.database.max_connections).await?;

        let filter = SongFilter::default()
            .group(group.unwrap_or_default())
            .song(song.unwrap_or_default())
            .page(i64::from(skip), i64::from(limit));
        let songs = db::find_songs(&pool, &filter).await?;

        if songs.is_empty() {
            println!("No songs found.");
        }
        for song in &songs {
            println!(
                "{:>5}  {} - {} ({})",
                song.id, song.group, song.song, song.release_date
            );
        }

        pool.close().await;
        Ok::<_, anyhow::Error>(())
    })
}
