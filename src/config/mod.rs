//! Startup configuration resolution.
//!
//! CLI flags win; absent flags fall back to the process environment
//! (`DATABASE_PATH`, `PORT`), then to defaults.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::server::RequestsLoggingLevel;

pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";
pub const PORT_ENV: &str = "PORT";

const DEFAULT_DATABASE_PATH: &str = "songs.db";
const DEFAULT_PORT: u16 = 5000;

/// CLI arguments subject to environment fallback. Mirrors the clap
/// struct in main.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_path: Option<PathBuf>,
    pub port: Option<u16>,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and the environment.
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let db_path = cli
            .db_path
            .clone()
            .or_else(|| std::env::var(DATABASE_PATH_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

        let port = match cli.port {
            Some(port) => port,
            None => match std::env::var(PORT_ENV) {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("Invalid {} value: {}", PORT_ENV, value))?,
                Err(_) => DEFAULT_PORT,
            },
        };

        Ok(AppConfig {
            db_path,
            port,
            logging_level: cli.logging_level.clone(),
            frontend_dir_path: cli.frontend_dir_path.clone(),
        })
    }
}
