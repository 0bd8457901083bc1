use axum::extract::FromRef;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;
use crate::catalog::CatalogService;

pub type SharedCatalog = Arc<CatalogService>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: SharedCatalog,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, catalog: SharedCatalog) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog,
            hash: env!("GIT_HASH").to_string(),
        }
    }
}

impl FromRef<ServerState> for SharedCatalog {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
