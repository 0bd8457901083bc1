//! HTTP client for the song catalog API.
//!
//! Non-2xx responses are turned into errors carrying the server's
//! `{message}` body verbatim, which is what ends up in the client error
//! state.

use anyhow::{anyhow, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::catalog::Stats;
use crate::song_store::{Song, SongInput, SongUpdate};

/// Client for the song catalog endpoints of a running server.
#[derive(Clone)]
pub struct SongsApi {
    client: Client,
    base_url: String,
}

impl SongsApi {
    /// Create a new SongsApi.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the server (e.g., "http://localhost:5000")
    pub fn new(base_url: String) -> Self {
        SongsApi {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the server is reachable.
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// GET /api/songs
    pub async fn get_all(&self) -> Result<Vec<Song>> {
        let url = format!("{}/api/songs", self.base_url);
        expect_json(self.client.get(&url).send().await?).await
    }

    /// POST /api/songs
    pub async fn create(&self, input: &SongInput) -> Result<Song> {
        let url = format!("{}/api/songs", self.base_url);
        expect_json(self.client.post(&url).json(input).send().await?).await
    }

    /// PUT /api/songs/{id}
    pub async fn update(&self, id: &str, update: &SongUpdate) -> Result<Song> {
        let url = format!("{}/api/songs/{}", self.base_url, id);
        expect_json(self.client.put(&url).json(update).send().await?).await
    }

    /// DELETE /api/songs/{id}
    pub async fn remove(&self, id: &str) -> Result<()> {
        let url = format!("{}/api/songs/{}", self.base_url, id);
        let response = self.client.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!(error_message(response).await));
        }
        Ok(())
    }

    /// GET /api/songs/stats
    pub async fn stats(&self) -> Result<Stats> {
        let url = format!("{}/api/songs/stats", self.base_url);
        expect_json(self.client.get(&url).send().await?).await
    }
}

async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.status().is_success() {
        return Err(anyhow!(error_message(response).await));
    }
    Ok(response.json().await?)
}

/// Extract the `{message}` body of a failed response, falling back to the
/// status line when the body is not in that shape.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body["message"].as_str().map(|s| s.to_string()));
    message.unwrap_or_else(|| format!("Request failed with status: {}", status))
}
