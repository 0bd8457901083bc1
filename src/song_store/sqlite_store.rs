//! SQLite-backed song store implementation.
//!
//! One `songs` table with document-merge update semantics. The schema is
//! created on open; there is no migration machinery.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;
use uuid::Uuid;

use super::error::StoreError;
use super::models::{GroupCount, Song, SongField, SongInput, SongUpdate};
use super::trait_def::SongStore;
use super::validation::{normalize_optional, validate_input, validate_update};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS songs (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    artist TEXT NOT NULL,
    album TEXT,
    genre TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

/// SQLite-backed song store.
#[derive(Clone)]
pub struct SqliteSongStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSongStore {
    /// Open (or create) the song database at `db_path`.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path.as_ref())
            .with_context(|| format!("Failed to open song database at {:?}", db_path.as_ref()))?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.execute_batch(SCHEMA)
            .context("Failed to create songs schema")?;

        let song_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM songs", [], |r| r.get(0))
            .unwrap_or(0);
        info!("Opened song catalog: {} songs", song_count);

        Ok(SqliteSongStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn parse_song_row(row: &rusqlite::Row) -> rusqlite::Result<Song> {
        Ok(Song {
            id: row.get(0)?,
            title: row.get(1)?,
            artist: row.get(2)?,
            album: row.get(3)?,
            genre: row.get(4)?,
            created_at: row.get::<_, DateTime<Utc>>(5)?,
            updated_at: row.get::<_, DateTime<Utc>>(6)?,
        })
    }

    fn get_song(conn: &Connection, id: &str) -> Result<Option<Song>, StoreError> {
        match conn.query_row(
            "SELECT id, title, artist, album, genre, created_at, updated_at
             FROM songs WHERE id = ?1",
            params![id],
            Self::parse_song_row,
        ) {
            Ok(song) => Ok(Some(song)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl SongStore for SqliteSongStore {
    fn insert(&self, input: SongInput) -> Result<Song, StoreError> {
        let input = validate_input(input)?;

        let now = Utc::now();
        let song = Song {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            artist: input.artist,
            album: input.album,
            genre: input.genre,
            created_at: now,
            updated_at: now,
        };

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO songs (id, title, artist, album, genre, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                song.id,
                song.title,
                song.artist,
                song.album,
                song.genre,
                song.created_at,
                song.updated_at
            ],
        )?;

        Ok(song)
    }

    fn find_all(&self) -> Result<Vec<Song>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(
            "SELECT id, title, artist, album, genre, created_at, updated_at
             FROM songs ORDER BY rowid",
        )?;
        let songs = stmt
            .query_map([], Self::parse_song_row)?
            .collect::<Result<Vec<Song>, _>>()?;
        Ok(songs)
    }

    fn update(&self, id: &str, update: SongUpdate) -> Result<Song, StoreError> {
        let update = validate_update(update)?;

        let conn = self.conn.lock().unwrap();
        let existing = Self::get_song(&conn, id)?.ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;

        let song = Song {
            id: existing.id,
            title: update.title.unwrap_or(existing.title),
            artist: update.artist.unwrap_or(existing.artist),
            album: match update.album {
                Some(value) => normalize_optional(Some(value)),
                None => existing.album,
            },
            genre: match update.genre {
                Some(value) => normalize_optional(Some(value)),
                None => existing.genre,
            },
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        conn.execute(
            "UPDATE songs SET title = ?2, artist = ?3, album = ?4, genre = ?5, updated_at = ?6
             WHERE id = ?1",
            params![
                song.id,
                song.title,
                song.artist,
                song.album,
                song.genre,
                song.updated_at
            ],
        )?;

        Ok(song)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        let affected = conn.execute("DELETE FROM songs WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        Ok(())
    }

    fn count(&self) -> Result<u64, StoreError> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM songs", [], |r| r.get(0))?;
        Ok(count as u64)
    }

    fn distinct_count(&self, field: SongField) -> Result<u64, StoreError> {
        let column = field.column();
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row(
            &format!(
                "SELECT COUNT(DISTINCT {column}) FROM songs WHERE {column} IS NOT NULL"
            ),
            [],
            |r| r.get(0),
        )?;
        Ok(count as u64)
    }

    fn group_count(&self, field: SongField) -> Result<Vec<GroupCount>, StoreError> {
        let column = field.column();
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {column}, COUNT(*) FROM songs GROUP BY {column}
             ORDER BY COUNT(*) DESC, {column}"
        ))?;
        let groups = stmt
            .query_map([], |row| {
                Ok(GroupCount {
                    key: row.get(0)?,
                    count: row.get::<_, i64>(1)? as u64,
                })
            })?
            .collect::<Result<Vec<GroupCount>, _>>()?;
        Ok(groups)
    }
}
