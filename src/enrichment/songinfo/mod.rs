//! Song info API integration
//!
//! Looks up descriptive metadata (release date, lyrics, link) for a
//! `(group, song)` pair from the external catalog service.

pub mod dto;
mod adapter;
mod client;

pub use adapter::to_detail;
pub use client::SongInfoClient;
