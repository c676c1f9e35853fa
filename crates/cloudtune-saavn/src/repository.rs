use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use cloudtune_core::domain::Song;

use crate::api::{ApiError, SaavnApi};
use crate::config::SaavnConfig;
use crate::mapper::map_song;
use crate::models::SaavnSong;

#[derive(Debug, Error)]
pub enum RepositoryError {
  /// The listing, search or detail call itself failed.
  #[error("Failed to {operation}: {source}")]
  Request { operation: &'static str, source: ApiError },
}

/// Fetches songs from the catalog and turns them into domain songs.
///
/// Listing and search results often come without stream URLs. Those
/// records are completed with one detail call each, in groups of at most
/// `batch_size` concurrent calls; a group is fully joined before the next
/// one starts.
pub struct SaavnRepository<A: SaavnApi> {
  api: A,
  language: String,
  batch_size: usize,
}

impl<A: SaavnApi> SaavnRepository<A> {
  pub fn new(api: A, config: &SaavnConfig) -> Self {
    Self {
      api,
      language: config.language.clone(),
      batch_size: config.detail_batch_size(),
    }
  }

  pub fn api(&self) -> &A {
    &self.api
  }

  pub async fn trending_songs(&self) -> Result<Vec<Song>, RepositoryError> {
    debug!("Fetching trending songs");

    let response = self.api.trending(&self.language).await.map_err(|source| {
      error!("Failed to fetch trending: {source}");
      RepositoryError::Request { operation: "fetch trending", source }
    })?;

    let records = response.into_songs();
    if records.is_empty() {
      warn!("No trending data found");
      return Ok(Vec::new());
    }

    debug!("Found {} trending songs", records.len());
    let songs = self.enrich(records).await;
    info!("Successfully mapped {} trending songs", songs.len());

    Ok(songs)
  }

  /// Searches the first page of songs. A blank query returns an empty
  /// list without calling the API.
  pub async fn search_songs(&self, query: &str, limit: u32) -> Result<Vec<Song>, RepositoryError> {
    if query.trim().is_empty() {
      return Ok(Vec::new());
    }

    debug!("Searching songs: {query}");

    let response = self.api.search_songs(query, 1, limit).await.map_err(|source| {
      error!("Failed to search '{query}': {source}");
      RepositoryError::Request { operation: "search", source }
    })?;

    let records = response.into_songs();
    if records.is_empty() {
      debug!("No search results for: {query}");
      return Ok(Vec::new());
    }

    debug!("Found {} search results", records.len());
    let songs = self.enrich(records).await;
    info!("Successfully mapped {} search results", songs.len());

    Ok(songs)
  }

  /// `Ok(None)` when the API has no such song or it is not playable.
  pub async fn song_detail(&self, song_id: &str) -> Result<Option<Song>, RepositoryError> {
    debug!("Fetching song detail: {song_id}");

    let response = self.api.song_detail(song_id).await.map_err(|source| {
      error!("Failed to fetch song detail {song_id}: {source}");
      RepositoryError::Request { operation: "fetch song detail", source }
    })?;

    let Some(record) = response.into_song() else {
      warn!("No song data found for: {song_id}");
      return Ok(None);
    };

    Ok(map_song(&record))
  }

  /// Maps `records`, fetching details for those without a stream URL.
  ///
  /// Never fails as a whole: a record whose detail call fails falls back to
  /// its own data, and is dropped if that is not mappable either. Surviving
  /// songs keep the order of `records`.
  pub async fn enrich(&self, records: Vec<SaavnSong>) -> Vec<Song> {
    let mut slots: Vec<Option<Song>> = Vec::with_capacity(records.len());
    let mut needs_detail: Vec<(usize, &SaavnSong)> = Vec::new();

    for (index, record) in records.iter().enumerate() {
      if record.has_stream_url() {
        slots.push(map_song(record));
      } else {
        slots.push(None);
        needs_detail.push((index, record));
      }
    }

    if !needs_detail.is_empty() {
      debug!("{} songs need detail calls", needs_detail.len());
    }

    for group in needs_detail.chunks(self.batch_size) {
      let calls = group.iter().map(|&(index, record)| async move { (index, self.detail_or_fallback(record).await) });

      for (index, song) in join_all(calls).await {
        slots[index] = song;
      }
    }

    slots.into_iter().flatten().collect()
  }

  async fn detail_or_fallback(&self, record: &SaavnSong) -> Option<Song> {
    let detailed = match record.id.as_deref() {
      Some(id) => match self.api.song_detail(id).await {
        Ok(response) => response.into_song().as_ref().and_then(map_song),
        Err(e) => {
          debug!("Error fetching detail for song {id}: {e}");
          None
        }
      },
      None => None,
    };

    let song = detailed.or_else(|| map_song(record));
    if song.is_none() {
      debug!("Dropping unplayable song {:?}", record.id);
    }
    song
  }
}
