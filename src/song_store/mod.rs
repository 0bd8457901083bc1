//! Song record store.
//!
//! Durable storage of `Song` entities plus the aggregation primitives used
//! to build catalog statistics.

mod error;
mod models;
mod null_store;
mod sqlite_store;
mod trait_def;
pub mod validation;

pub use error::StoreError;
pub use models::{GroupCount, Song, SongField, SongInput, SongUpdate};
pub use null_store::NullSongStore;
pub use sqlite_store::SqliteSongStore;
pub use trait_def::SongStore;
