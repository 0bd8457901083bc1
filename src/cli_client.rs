//! Terminal client for the song catalog server.
//!
//! A thin presentation layer: each subcommand dispatches intents through
//! the sync layer, waits for it to settle, and renders the resulting
//! client state as plain text.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use song_catalog_server::catalog::Stats;
use song_catalog_server::client::{spawn_sync, Intent, SongFilter, SongsApi, SongsState};
use song_catalog_server::song_store::{Song, SongInput, SongUpdate};

#[derive(Parser, Debug)]
#[clap(about = "Terminal client for the song catalog server")]
struct CliArgs {
    /// Base URL of the song catalog server.
    #[clap(long, default_value = "http://127.0.0.1:5000")]
    pub server_url: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List songs, with client-local filtering.
    List {
        /// Case-insensitive substring match across title, artist, album
        /// and genre.
        #[clap(long)]
        search: Option<String>,
        /// Exact genre match.
        #[clap(long)]
        genre: Option<String>,
        /// Exact artist match.
        #[clap(long)]
        artist: Option<String>,
        /// Exact album match.
        #[clap(long)]
        album: Option<String>,
    },
    /// Add a song to the catalog.
    Add {
        title: String,
        artist: String,
        #[clap(long)]
        album: Option<String>,
        #[clap(long)]
        genre: Option<String>,
    },
    /// Update fields of an existing song. Omitted fields are untouched.
    Update {
        id: String,
        #[clap(long)]
        title: Option<String>,
        #[clap(long)]
        artist: Option<String>,
        #[clap(long)]
        album: Option<String>,
        #[clap(long)]
        genre: Option<String>,
    },
    /// Delete a song.
    Delete { id: String },
    /// Show catalog statistics.
    Stats,
}

fn fail_on_error(state: &SongsState) -> Result<()> {
    if let Some(message) = &state.error {
        bail!("{}", message);
    }
    Ok(())
}

fn print_song(song: &Song) {
    println!(
        "{}  {} - {}  [{} / {}]",
        song.id,
        song.artist,
        song.title,
        song.album.as_deref().unwrap_or("-"),
        song.genre.as_deref().unwrap_or("-"),
    );
}

fn print_grouping(label: &str, groups: &[song_catalog_server::song_store::GroupCount]) {
    println!("{}:", label);
    for group in groups {
        println!(
            "  {}: {}",
            group.key.as_deref().unwrap_or("(none)"),
            group.count
        );
    }
}

fn print_stats(stats: &Stats) {
    println!("Songs:   {}", stats.total_songs);
    println!("Artists: {}", stats.total_artists);
    println!("Albums:  {}", stats.total_albums);
    println!("Genres:  {}", stats.total_genres);
    print_grouping("Per genre", &stats.songs_per_genre);
    print_grouping("Per artist", &stats.songs_per_artist);
    print_grouping("Per album", &stats.songs_per_album);
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let sync = spawn_sync(SongsApi::new(args.server_url.clone()));

    match args.command {
        Command::List {
            search,
            genre,
            artist,
            album,
        } => {
            sync.dispatch(Intent::FetchSongs);
            sync.wait_idle().await;
            let state = sync.state();
            fail_on_error(&state)?;

            let filter = SongFilter {
                search,
                genre,
                artist,
                album,
            };
            for song in filter.apply(&state.songs) {
                print_song(&song);
            }
        }
        Command::Add {
            title,
            artist,
            album,
            genre,
        } => {
            sync.dispatch(Intent::CreateSong(SongInput {
                title,
                artist,
                album,
                genre,
            }));
            sync.wait_idle().await;
            let state = sync.state();
            fail_on_error(&state)?;

            if let Some(song) = state.songs.last() {
                println!("Created:");
                print_song(song);
            }
            if let Some(stats) = &state.stats {
                println!("Catalog now holds {} songs", stats.total_songs);
            }
        }
        Command::Update {
            id,
            title,
            artist,
            album,
            genre,
        } => {
            sync.dispatch(Intent::UpdateSong {
                id: id.clone(),
                update: SongUpdate {
                    title,
                    artist,
                    album,
                    genre,
                },
            });
            sync.wait_idle().await;
            fail_on_error(&sync.state())?;

            sync.dispatch(Intent::FetchSongs);
            sync.wait_idle().await;
            let state = sync.state();
            fail_on_error(&state)?;

            if let Some(song) = state.songs.iter().find(|s| s.id == id) {
                println!("Updated:");
                print_song(song);
            }
        }
        Command::Delete { id } => {
            sync.dispatch(Intent::DeleteSong(id.clone()));
            sync.wait_idle().await;
            let state = sync.state();
            fail_on_error(&state)?;

            println!("Deleted {}", id);
            if let Some(stats) = &state.stats {
                println!("Catalog now holds {} songs", stats.total_songs);
            }
        }
        Command::Stats => {
            sync.dispatch(Intent::FetchStats);
            sync.wait_idle().await;
            let state = sync.state();
            fail_on_error(&state)?;

            match &state.stats {
                Some(stats) => print_stats(stats),
                None => bail!("No stats received"),
            }
        }
    }

    Ok(())
}
