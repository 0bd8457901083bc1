//! Song Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod client;
pub mod config;
pub mod server;
pub mod song_store;

// Re-export commonly used types for convenience
pub use catalog::{CatalogService, Stats};
pub use client::{spawn_sync, Intent, SongFilter, SongsApi, SyncHandle};
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
pub use song_store::{NullSongStore, Song, SongStore, SqliteSongStore, StoreError};
