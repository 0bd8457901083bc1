//! Client state store.
//!
//! A normalized cache of songs + stats + request status. Mutation happens
//! exclusively through `apply`, one transition at a time; the sync layer
//! is the only producer of transitions.

use crate::catalog::Stats;
use crate::song_store::Song;

/// Outcome of a sync layer step, applied to the state store.
#[derive(Debug, Clone)]
pub enum Transition {
    RequestStart,
    SongsLoaded(Vec<Song>),
    StatsLoaded(Stats),
    SongAdded(Song),
    SongUpdated(Song),
    SongRemoved(String),
    RequestFailed(String),
}

/// In-memory client cache of the catalog. The record store remains the
/// source of truth; conflicts are resolved by re-fetch, never by merge.
#[derive(Debug, Clone, Default)]
pub struct SongsState {
    pub songs: Vec<Song>,
    pub stats: Option<Stats>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SongsState {
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::RequestStart => {
                self.loading = true;
                self.error = None;
            }
            Transition::SongsLoaded(songs) => {
                self.songs = songs;
                self.loading = false;
            }
            Transition::StatsLoaded(stats) => {
                self.stats = Some(stats);
                self.loading = false;
            }
            Transition::SongAdded(song) => {
                self.songs.push(song);
                self.loading = false;
            }
            Transition::SongUpdated(song) => {
                if let Some(existing) = self.songs.iter_mut().find(|s| s.id == song.id) {
                    *existing = song;
                }
                self.loading = false;
            }
            Transition::SongRemoved(id) => {
                self.songs.retain(|s| s.id != id);
                self.loading = false;
            }
            Transition::RequestFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_song(id: &str, title: &str) -> Song {
        let now = Utc::now();
        Song {
            id: id.to_string(),
            title: title.to_string(),
            artist: "Artist".to_string(),
            album: None,
            genre: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_request_start_sets_loading_and_clears_error() {
        let mut state = SongsState {
            error: Some("previous failure".to_string()),
            ..Default::default()
        };
        state.apply(Transition::RequestStart);
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_songs_loaded_replaces_list() {
        let mut state = SongsState {
            songs: vec![make_song("1", "Old")],
            loading: true,
            ..Default::default()
        };
        state.apply(Transition::SongsLoaded(vec![make_song("2", "New")]));
        assert_eq!(state.songs.len(), 1);
        assert_eq!(state.songs[0].id, "2");
        assert!(!state.loading);
    }

    #[test]
    fn test_song_added_appends() {
        let mut state = SongsState {
            songs: vec![make_song("1", "A")],
            loading: true,
            ..Default::default()
        };
        state.apply(Transition::SongAdded(make_song("2", "B")));
        assert_eq!(state.songs.len(), 2);
        assert_eq!(state.songs[1].id, "2");
        assert!(!state.loading);
    }

    #[test]
    fn test_song_updated_replaces_matching_entry() {
        let mut state = SongsState {
            songs: vec![make_song("1", "A"), make_song("2", "B")],
            ..Default::default()
        };
        state.apply(Transition::SongUpdated(make_song("2", "B2")));
        assert_eq!(state.songs[1].title, "B2");
        assert_eq!(state.songs[0].title, "A");
    }

    #[test]
    fn test_song_updated_unknown_id_is_noop() {
        let mut state = SongsState {
            songs: vec![make_song("1", "A")],
            ..Default::default()
        };
        state.apply(Transition::SongUpdated(make_song("99", "Ghost")));
        assert_eq!(state.songs.len(), 1);
        assert_eq!(state.songs[0].title, "A");
    }

    #[test]
    fn test_song_removed_filters_it_out() {
        let mut state = SongsState {
            songs: vec![make_song("1", "A"), make_song("2", "B")],
            ..Default::default()
        };
        state.apply(Transition::SongRemoved("1".to_string()));
        assert_eq!(state.songs.len(), 1);
        assert_eq!(state.songs[0].id, "2");
    }

    #[test]
    fn test_request_failed_surfaces_message() {
        let mut state = SongsState {
            loading: true,
            ..Default::default()
        };
        state.apply(Transition::RequestFailed("boom".to_string()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }
}
