//! Validation and normalization for song payloads.
//!
//! Required fields must be non-empty after trimming. Optional fields are
//! trimmed and collapse to `None` when empty, so "no album" is stored the
//! same way whether the client omitted the field or sent an empty string.

use super::error::StoreError;
use super::models::{SongInput, SongUpdate};

/// Trim an optional field, collapsing empty values to `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require(value: &str, field: &'static str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation { field });
    }
    Ok(trimmed.to_string())
}

/// Validate a create payload, returning its normalized form.
pub fn validate_input(input: SongInput) -> Result<SongInput, StoreError> {
    Ok(SongInput {
        title: require(&input.title, "title")?,
        artist: require(&input.artist, "artist")?,
        album: normalize_optional(input.album),
        genre: normalize_optional(input.genre),
    })
}

/// Validate an update payload, returning its normalized form.
///
/// A provided `title` or `artist` must remain non-empty; a provided
/// `album` or `genre` may be empty, which clears the field on merge.
pub fn validate_update(update: SongUpdate) -> Result<SongUpdate, StoreError> {
    Ok(SongUpdate {
        title: update
            .title
            .map(|v| require(&v, "title"))
            .transpose()?,
        artist: update
            .artist
            .map(|v| require(&v, "artist"))
            .transpose()?,
        album: update.album.map(|v| v.trim().to_string()),
        genre: update.genre.map(|v| v.trim().to_string()),
    })
}
