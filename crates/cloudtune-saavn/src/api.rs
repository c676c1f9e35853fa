use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::models::{SearchResponse, SongDetailResponse, TrendingResponse};

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("{code} {message}")]
  Status { code: u16, message: String },

  #[error("decode error: {0}")]
  Decode(String),
}

impl ApiError {
  fn from_status(status: StatusCode) -> Self {
    ApiError::Status {
      code: status.as_u16(),
      message: status.canonical_reason().unwrap_or("Unknown status").to_string(),
    }
  }
}

/// Read-only calls against the catalog API. One network round trip each,
/// no retries.
#[async_trait]
pub trait SaavnApi: Send + Sync {
  async fn trending(&self, language: &str) -> Result<TrendingResponse, ApiError>;

  async fn search_songs(&self, query: &str, page: u32, limit: u32) -> Result<SearchResponse, ApiError>;

  async fn song_detail(&self, song_id: &str) -> Result<SongDetailResponse, ApiError>;
}

#[derive(Clone)]
pub struct HttpSaavnApi {
  client: Client,
  base_url: String,
}

impl HttpSaavnApi {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self::with_client(Client::new(), base_url)
  }

  pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { client, base_url }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
    let url = format!("{}{}", self.base_url, path);
    debug!("GET {url} {query:?}");

    let response = self.client.get(&url).query(query).send().await?;

    let status = response.status();
    if !status.is_success() {
      return Err(ApiError::from_status(status));
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
  }
}

#[async_trait]
impl SaavnApi for HttpSaavnApi {
  async fn trending(&self, language: &str) -> Result<TrendingResponse, ApiError> {
    self.get_json("/api/modules", &[("category", "trending".to_string()), ("language", language.to_string())]).await
  }

  async fn search_songs(&self, query: &str, page: u32, limit: u32) -> Result<SearchResponse, ApiError> {
    self
      .get_json(
        "/api/search/songs",
        &[("query", query.to_string()), ("page", page.to_string()), ("limit", limit.to_string())],
      )
      .await
  }

  async fn song_detail(&self, song_id: &str) -> Result<SongDetailResponse, ApiError> {
    let path = format!("/api/songs/{}", urlencoding::encode(song_id));
    self.get_json(&path, &[]).await
  }
}
