//! HTTP client for end-to-end tests
//!
//! A thin wrapper over reqwest that returns raw responses, so tests can
//! assert status codes and bodies directly. When API routes change,
//! update only this file.

use reqwest::Response;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

pub struct TestClient {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    #[allow(dead_code)]
    pub async fn health(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("health request failed")
    }

    /// GET /api/songs
    pub async fn list_songs(&self) -> Response {
        self.client
            .get(format!("{}/api/songs", self.base_url))
            .send()
            .await
            .expect("list request failed")
    }

    /// POST /api/songs
    pub async fn create_song(&self, body: &serde_json::Value) -> Response {
        self.client
            .post(format!("{}/api/songs", self.base_url))
            .json(body)
            .send()
            .await
            .expect("create request failed")
    }

    /// PUT /api/songs/{id}
    pub async fn update_song(&self, id: &str, body: &serde_json::Value) -> Response {
        self.client
            .put(format!("{}/api/songs/{}", self.base_url, id))
            .json(body)
            .send()
            .await
            .expect("update request failed")
    }

    /// DELETE /api/songs/{id}
    pub async fn delete_song(&self, id: &str) -> Response {
        self.client
            .delete(format!("{}/api/songs/{}", self.base_url, id))
            .send()
            .await
            .expect("delete request failed")
    }

    /// GET /api/songs/stats
    pub async fn get_stats(&self) -> Response {
        self.client
            .get(format!("{}/api/songs/stats", self.base_url))
            .send()
            .await
            .expect("stats request failed")
    }
}
