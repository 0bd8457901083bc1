//! Song entities and the payload types accepted by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted catalog entry.
///
/// `id` is assigned by the store on insert and never changes. A persisted
/// song always has non-empty `title` and `artist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a song.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    pub album: Option<String>,
    pub genre: Option<String>,
}

/// Partial update payload. Provided fields are merged into the stored
/// document; absent fields are left untouched. Providing an empty string
/// for `album` or `genre` clears the field, while an empty `title` or
/// `artist` is a validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SongUpdate {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
}

/// The song fields that support distinct/group aggregation.
///
/// A closed enum so no request data ever reaches a SQL identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongField {
    Artist,
    Album,
    Genre,
}

impl SongField {
    pub(crate) fn column(&self) -> &'static str {
        match self {
            SongField::Artist => "artist",
            SongField::Album => "album",
            SongField::Genre => "genre",
        }
    }
}

/// One bucket of a per-field grouping. `key` is `None` for songs that do
/// not have the grouped field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupCount {
    pub key: Option<String>,
    pub count: u64,
}
