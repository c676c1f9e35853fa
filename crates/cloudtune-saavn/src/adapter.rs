use async_trait::async_trait;

use cloudtune_core::domain::Song;
use cloudtune_core::ports::catalog::{CatalogError as CoreCatalogError, SongCatalog as CoreSongCatalog};

use crate::api::{HttpSaavnApi, SaavnApi};
use crate::config::SaavnConfig;
use crate::repository::{RepositoryError, SaavnRepository};

/// `SongCatalog` backed by the JioSaavn API.
///
/// Only translates errors (infra -> domain); the work happens in
/// [`SaavnRepository`].
pub struct SaavnCatalog<A: SaavnApi = HttpSaavnApi> {
  repo: SaavnRepository<A>,
}

impl SaavnCatalog<HttpSaavnApi> {
  pub fn from_config(config: &SaavnConfig) -> Self {
    Self::new(SaavnRepository::new(HttpSaavnApi::new(config.base_url.clone()), config))
  }
}

impl<A: SaavnApi> SaavnCatalog<A> {
  pub fn new(repo: SaavnRepository<A>) -> Self {
    Self { repo }
  }
}

#[async_trait]
impl<A: SaavnApi> CoreSongCatalog for SaavnCatalog<A> {
  async fn trending_songs(&self) -> Result<Vec<Song>, CoreCatalogError> {
    self.repo.trending_songs().await.map_err(map_repository_error)
  }

  async fn search_songs(&self, query: &str, limit: u32) -> Result<Vec<Song>, CoreCatalogError> {
    self.repo.search_songs(query, limit).await.map_err(map_repository_error)
  }

  async fn song_detail(&self, provider_id: &str) -> Result<Option<Song>, CoreCatalogError> {
    self.repo.song_detail(provider_id).await.map_err(map_repository_error)
  }
}

fn map_repository_error(err: RepositoryError) -> CoreCatalogError {
  CoreCatalogError::Request(err.to_string())
}
