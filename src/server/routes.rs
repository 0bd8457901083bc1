use anyhow::Result;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde_json::json;
use tower_http::services::ServeDir;
use tracing::error;

use super::{log_requests, state::*, ServerConfig};
use crate::song_store::{SongInput, SongUpdate, StoreError};

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

/// Map a store failure onto its HTTP status with a `{message}` body.
fn error_response(err: StoreError) -> Response {
    let status = match &err {
        StoreError::Validation { .. } => StatusCode::BAD_REQUEST,
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::Storage(_) => {
            error!("Store failure: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({ "message": err.to_string() }))).into_response()
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    format!(
        "song-catalog-server {} up {}",
        state.hash,
        format_uptime(state.start_time.elapsed())
    )
}

async fn list_songs(State(catalog): State<SharedCatalog>) -> Response {
    match catalog.list_songs() {
        Ok(songs) => Json(songs).into_response(),
        Err(err) => error_response(err),
    }
}

async fn create_song(
    State(catalog): State<SharedCatalog>,
    Json(input): Json<SongInput>,
) -> Response {
    match catalog.create_song(input) {
        Ok(song) => (StatusCode::CREATED, Json(song)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_song(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
    Json(update): Json<SongUpdate>,
) -> Response {
    match catalog.update_song(&id, update) {
        Ok(song) => Json(song).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_song(State(catalog): State<SharedCatalog>, Path(id): Path<String>) -> Response {
    match catalog.delete_song(&id) {
        Ok(()) => Json(json!({ "message": "Song deleted successfully" })).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_stats(State(catalog): State<SharedCatalog>) -> Response {
    match catalog.get_stats() {
        Ok(stats) => Json(stats).into_response(),
        Err(err) => error_response(err),
    }
}

pub fn make_app(config: ServerConfig, catalog: SharedCatalog) -> Router {
    let state = ServerState::new(config.clone(), catalog);

    let song_routes: Router = Router::new()
        .route("/", get(list_songs).post(create_song))
        .route("/stats", get(get_stats))
        .route("/{id}", put(update_song).delete(delete_song))
        .with_state(state.clone());

    let home_router: Router = match &config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    home_router
        .nest("/api/songs", song_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(config: ServerConfig, catalog: SharedCatalog) -> Result<()> {
    let port = config.port;
    let app = make_app(config, catalog);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
