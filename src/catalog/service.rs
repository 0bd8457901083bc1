use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::song_store::{
    GroupCount, Song, SongField, SongInput, SongStore, SongUpdate, StoreError,
};

/// Aggregate view over the whole song collection, recomputed in full on
/// every request. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_songs: u64,
    pub total_artists: u64,
    pub total_albums: u64,
    pub total_genres: u64,
    pub songs_per_genre: Vec<GroupCount>,
    pub songs_per_artist: Vec<GroupCount>,
    pub songs_per_album: Vec<GroupCount>,
}

/// Stateless request handlers over the song store.
pub struct CatalogService {
    store: Arc<dyn SongStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn SongStore>) -> Self {
        CatalogService { store }
    }

    pub fn list_songs(&self) -> Result<Vec<Song>, StoreError> {
        self.store.find_all()
    }

    pub fn create_song(&self, input: SongInput) -> Result<Song, StoreError> {
        // The store validates too; this check keeps the service contract
        // independent of the backing store.
        if input.title.trim().is_empty() {
            return Err(StoreError::Validation { field: "title" });
        }
        if input.artist.trim().is_empty() {
            return Err(StoreError::Validation { field: "artist" });
        }
        self.store.insert(input)
    }

    pub fn update_song(&self, id: &str, update: SongUpdate) -> Result<Song, StoreError> {
        self.store.update(id, update)
    }

    pub fn delete_song(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(id)
    }

    /// Assemble stats from the store's aggregation primitives.
    ///
    /// The calls read a live snapshot with no isolation against concurrent
    /// writes, which is acceptable for a display dashboard.
    pub fn get_stats(&self) -> Result<Stats, StoreError> {
        Ok(Stats {
            total_songs: self.store.count()?,
            total_artists: self.store.distinct_count(SongField::Artist)?,
            total_albums: self.store.distinct_count(SongField::Album)?,
            total_genres: self.store.distinct_count(SongField::Genre)?,
            songs_per_genre: self.store.group_count(SongField::Genre)?,
            songs_per_artist: self.store.group_count(SongField::Artist)?,
            songs_per_album: self.store.group_count(SongField::Album)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song_store::SqliteSongStore;
    use tempfile::TempDir;

    fn make_service() -> (TempDir, CatalogService) {
        let dir = TempDir::new().unwrap();
        let store = SqliteSongStore::new(dir.path().join("songs.db")).unwrap();
        (dir, CatalogService::new(Arc::new(store)))
    }

    fn input(title: &str, artist: &str, genre: Option<&str>) -> SongInput {
        SongInput {
            title: title.to_string(),
            artist: artist.to_string(),
            album: None,
            genre: genre.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_create_song_rejects_missing_fields_before_store() {
        let (_dir, service) = make_service();
        let err = service.create_song(input("", "X", None)).unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "title" }));
        let err = service.create_song(input("A", "", None)).unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "artist" }));
    }

    #[test]
    fn test_total_songs_equals_list_length() {
        let (_dir, service) = make_service();
        service.create_song(input("A", "X", Some("Rock"))).unwrap();
        let b = service.create_song(input("B", "Y", Some("Jazz"))).unwrap();
        service.create_song(input("C", "X", None)).unwrap();

        let stats = service.get_stats().unwrap();
        assert_eq!(stats.total_songs, service.list_songs().unwrap().len() as u64);

        service.delete_song(&b.id).unwrap();
        let stats = service.get_stats().unwrap();
        assert_eq!(stats.total_songs, service.list_songs().unwrap().len() as u64);
    }

    #[test]
    fn test_stats_assembles_all_groupings() {
        let (_dir, service) = make_service();
        service.create_song(input("A", "X", Some("Rock"))).unwrap();
        service.create_song(input("B", "Y", None)).unwrap();

        let stats = service.get_stats().unwrap();
        assert_eq!(stats.total_artists, 2);
        assert_eq!(stats.total_albums, 0);
        assert_eq!(stats.total_genres, 1);
        assert_eq!(stats.songs_per_genre.len(), 2); // Rock + null bucket
        assert_eq!(stats.songs_per_artist.len(), 2);
        assert_eq!(stats.songs_per_album.len(), 1); // null bucket only
    }

    #[test]
    fn test_errors_pass_through_untouched() {
        let (_dir, service) = make_service();
        let err = service
            .update_song("missing", SongUpdate::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        let err = service.delete_song("missing").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
