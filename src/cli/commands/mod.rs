//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `serve`: Run the HTTP API
//! - `list`: Print songs from the configured store

mod list;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::config::{self, Config, Overrides};

pub use list::cmd_list;
pub use serve::cmd_serve;

/// Song catalog service
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (default: OS config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:8080
    #[arg(long, env = "BIND_ADDR", global = true)]
    pub bind: Option<String>,

    /// SQLite database URL, e.g. sqlite:songs.db
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Base URL of the song info service
    #[arg(long, env = "ENRICHMENT_API_URL", global = true)]
    pub enrichment_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (the default)
    Serve,
    /// List songs in the catalog
    List {
        /// Exact group name
        #[arg(long)]
        group: Option<String>,
        /// Exact song title
        #[arg(long)]
        song: Option<String>,
        /// Number of songs to skip
        #[arg(long, default_value_t = 0)]
        skip: u32,
        /// Maximum number of songs to print
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
}

/// Load the config file and apply command-line/environment overrides.
///
/// An explicit `--config` must be readable; the default location falls back
/// to built-in defaults.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let base = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load(),
    };
    Ok(base.with_overrides(&Overrides {
        bind: cli.bind.clone(),
        database_url: cli.database_url.clone(),
        enrichment_url: cli.enrichment_url.clone(),
    }))
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;
    let rt = Runtime::new()?;

    match &cli.command {
        None | Some(Commands::Serve) => cmd_serve(&rt, &config),
        Some(Commands::List {
            group,
            song,
            skip,
            limit,
        }) => cmd_list(
            &rt,
            &config,
            group.as_deref(),
            song.as_deref(),
            *skip,
            *limit,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["song-catalog"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_list_arguments() {
        let cli = Cli::try_parse_from([
            "song-catalog",
            "list",
            "--group",
            "Muse",
            "--limit",
            "3",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::List {
                group, skip, limit, ..
            }) => {
                assert_eq!(group.as_deref(), Some("Muse"));
                assert_eq!(skip, 0);
                assert_eq!(limit, 3);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nbind = \"127.0.0.1:1\"\n[enrichment]\nbase_url = \"http://file\"\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "song-catalog",
            "--config",
            path.to_str().unwrap(),
            "--bind",
            "127.0.0.1:9999",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:9999");
        assert_eq!(config.enrichment.base_url, "http://file");
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let cli = Cli::try_parse_from(["song-catalog", "--config", "/nonexistent/config.toml"])
            .unwrap();
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
