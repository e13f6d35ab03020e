//! Song Catalog - an HTTP service for managing a catalog of songs.
//!
//! Songs are listed with filters and pagination, created after enrichment
//! from an external song info service, and deleted by ID. Storage is SQLite
//! via SQLx; the HTTP surface is served by axum.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod enrichment;
pub mod error;
pub mod model;
#[cfg(test)]
pub mod test_utils;
