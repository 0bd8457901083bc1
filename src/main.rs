use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalog;
use catalog::CatalogService;

mod config;
use config::{AppConfig, CliConfig};

mod server;
use server::{run_server, RequestsLoggingLevel, ServerConfig};

mod song_store;
use song_store::{NullSongStore, SongStore, SqliteSongStore};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite song database file. Falls back to the
    /// DATABASE_PATH environment variable, then to "songs.db".
    #[clap(long)]
    pub db_path: Option<PathBuf>,

    /// The port to listen on. Falls back to the PORT environment
    /// variable, then to 5000.
    #[clap(short, long)]
    pub port: Option<u16>,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let config = AppConfig::resolve(&CliConfig {
        db_path: cli_args.db_path,
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        frontend_dir_path: cli_args.frontend_dir_path,
    })?;

    info!("Opening song database at {:?}...", config.db_path);
    // Fail open on a broken store: the process stays up for diagnostics
    // and requests fail individually instead.
    let store: Arc<dyn SongStore> = match SqliteSongStore::new(&config.db_path) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            error!("Failed to open song database: {:#}", err);
            Arc::new(NullSongStore)
        }
    };

    let catalog = Arc::new(CatalogService::new(store));

    info!("Ready to serve at port {}!", config.port);
    run_server(
        ServerConfig {
            requests_logging_level: config.logging_level,
            port: config.port,
            frontend_dir_path: config.frontend_dir_path,
        },
        catalog,
    )
    .await
}
