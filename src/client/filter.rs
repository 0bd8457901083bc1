//! Client-local song filtering.
//!
//! Pure and transient: never persisted, never sent to the server.

use crate::song_store::Song;

/// Free-text search plus exact-match selectors, all conjunctive. Empty or
/// absent parts are inactive; clearing every part restores the full list.
#[derive(Debug, Clone, Default)]
pub struct SongFilter {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

fn active(part: &Option<String>) -> Option<&str> {
    part.as_deref().filter(|s| !s.is_empty())
}

fn eq_ignore_case(selector: &str, value: &Option<String>) -> bool {
    value
        .as_deref()
        .is_some_and(|v| v.eq_ignore_ascii_case(selector))
}

impl SongFilter {
    pub fn matches(&self, song: &Song) -> bool {
        if let Some(search) = active(&self.search) {
            let needle = search.to_lowercase();
            let hit = [
                Some(song.title.as_str()),
                Some(song.artist.as_str()),
                song.album.as_deref(),
                song.genre.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(genre) = active(&self.genre) {
            if !eq_ignore_case(genre, &song.genre) {
                return false;
            }
        }
        if let Some(artist) = active(&self.artist) {
            if !song.artist.eq_ignore_ascii_case(artist) {
                return false;
            }
        }
        if let Some(album) = active(&self.album) {
            if !eq_ignore_case(album, &song.album) {
                return false;
            }
        }
        true
    }

    /// The visible subset of `songs` under this filter.
    pub fn apply(&self, songs: &[Song]) -> Vec<Song> {
        songs
            .iter()
            .filter(|song| self.matches(song))
            .cloned()
            .collect()
    }
}
