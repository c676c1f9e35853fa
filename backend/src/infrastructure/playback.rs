use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use cloudtune_core::CoreError;
use cloudtune_core::domain::{Song, SongId};
use cloudtune_core::ports::Playback;

#[derive(Debug, Default)]
struct QueueState {
  queue: Vec<Song>,
  current: Option<usize>,
  favorites: HashSet<SongId>,
}

/// A `Playback` implementation that only keeps the queue in memory.
///
/// Stands in for the real player when running headless (CLI, tests): it
/// records what the screen asked for without producing any audio.
#[derive(Debug, Default)]
pub struct QueuePlayback {
  state: Mutex<QueueState>,
}

impl QueuePlayback {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> Result<MutexGuard<'_, QueueState>, CoreError> {
    self.state.lock().map_err(|_| CoreError::Playback("playback mutex poisoned".to_string()))
  }

  pub fn queue(&self) -> Vec<Song> {
    self.lock().map(|s| s.queue.clone()).unwrap_or_default()
  }

  pub fn current(&self) -> Option<Song> {
    let state = self.lock().ok()?;
    state.current.and_then(|i| state.queue.get(i).cloned())
  }

  pub fn is_favorite(&self, id: &SongId) -> bool {
    self.lock().map(|s| s.favorites.contains(id)).unwrap_or(false)
  }
}

#[async_trait]
impl Playback for QueuePlayback {
  async fn play_songs(&self, songs: Vec<Song>, start_index: usize) -> Result<(), CoreError> {
    if start_index >= songs.len() {
      return Err(CoreError::Playback(format!("start index {start_index} out of range for {} songs", songs.len())));
    }

    let mut state = self.lock()?;
    state.queue = songs;
    state.current = Some(start_index);
    Ok(())
  }

  async fn add_to_queue_next(&self, song: Song) -> Result<(), CoreError> {
    let mut state = self.lock()?;
    let at = state.current.map_or(0, |i| i + 1);
    state.queue.insert(at, song);
    Ok(())
  }

  async fn add_to_queue(&self, song: Song) -> Result<(), CoreError> {
    self.lock()?.queue.push(song);
    Ok(())
  }

  async fn toggle_favorite(&self, id: &SongId) -> Result<(), CoreError> {
    let mut state = self.lock()?;
    let now_favorite = if state.favorites.remove(id) {
      false
    } else {
      state.favorites.insert(id.clone());
      true
    };

    for song in state.queue.iter_mut().filter(|s| &s.id == id) {
      song.is_favorite = now_favorite;
    }
    Ok(())
  }
}
