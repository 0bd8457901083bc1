//! Null song store implementation.
//!
//! Used when the database cannot be opened at startup: the process stays
//! up for diagnostics and every request fails individually with a
//! storage error.

use super::error::StoreError;
use super::models::{GroupCount, Song, SongField, SongInput, SongUpdate};
use super::trait_def::SongStore;

/// A song store whose every operation fails with a storage error.
pub struct NullSongStore;

fn unavailable() -> StoreError {
    StoreError::Storage("Song database is not available".to_string())
}

impl SongStore for NullSongStore {
    fn insert(&self, _input: SongInput) -> Result<Song, StoreError> {
        Err(unavailable())
    }

    fn find_all(&self) -> Result<Vec<Song>, StoreError> {
        Err(unavailable())
    }

    fn update(&self, _id: &str, _update: SongUpdate) -> Result<Song, StoreError> {
        Err(unavailable())
    }

    fn delete(&self, _id: &str) -> Result<(), StoreError> {
        Err(unavailable())
    }

    fn count(&self) -> Result<u64, StoreError> {
        Err(unavailable())
    }

    fn distinct_count(&self, _field: SongField) -> Result<u64, StoreError> {
        Err(unavailable())
    }

    fn group_count(&self, _field: SongField) -> Result<Vec<GroupCount>, StoreError> {
        Err(unavailable())
    }
}
