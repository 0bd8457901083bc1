//! SongStore trait definition.

use super::error::StoreError;
use super::models::{GroupCount, Song, SongField, SongInput, SongUpdate};

/// Trait for song storage backends.
///
/// The server works against this trait so it can run with the SQLite
/// store or, when the database cannot be opened, the fail-open
/// `NullSongStore`.
pub trait SongStore: Send + Sync {
    /// Insert a new song, assigning its id and timestamps.
    ///
    /// Fails with `StoreError::Validation` if `title` or `artist` is
    /// missing or empty.
    fn insert(&self, input: SongInput) -> Result<Song, StoreError>;

    /// All songs in insertion order.
    fn find_all(&self) -> Result<Vec<Song>, StoreError>;

    /// Merge the provided fields into an existing song and return the
    /// updated document. Fails with `StoreError::NotFound` if `id` is
    /// unknown.
    fn update(&self, id: &str, update: SongUpdate) -> Result<Song, StoreError>;

    /// Hard delete. Fails with `StoreError::NotFound` if `id` is unknown.
    fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Total number of songs.
    fn count(&self) -> Result<u64, StoreError>;

    /// Number of distinct present values of the given field. Songs
    /// without the field set do not contribute.
    fn distinct_count(&self, field: SongField) -> Result<u64, StoreError>;

    /// Per-value song counts for the given field, including a `None`
    /// bucket for songs without the field set.
    fn group_count(&self, field: SongField) -> Result<Vec<GroupCount>, StoreError>;
}
