use std::sync::Arc;

use cloudtune_core::domain::Song;
use cloudtune_core::ports::SongCatalog;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// State holder for the trending screen.
///
/// Three independent cells: the last fetched list, the loading flag and the
/// error message. Each can be observed on its own through `subscribe_*`.
/// Loads are not coalesced: two overlapping loads race and the last one to
/// finish wins.
pub struct TrendingViewModel<C: SongCatalog> {
  catalog: Arc<C>,
  trending_songs: watch::Sender<Vec<Song>>,
  is_loading: watch::Sender<bool>,
  error_message: watch::Sender<Option<String>>,
}

impl<C: SongCatalog> TrendingViewModel<C> {
  pub fn new(catalog: Arc<C>) -> Self {
    Self {
      catalog,
      trending_songs: watch::Sender::new(Vec::new()),
      is_loading: watch::Sender::new(false),
      error_message: watch::Sender::new(None),
    }
  }

  pub fn trending_songs(&self) -> Vec<Song> {
    self.trending_songs.borrow().clone()
  }

  pub fn is_loading(&self) -> bool {
    *self.is_loading.borrow()
  }

  pub fn error_message(&self) -> Option<String> {
    self.error_message.borrow().clone()
  }

  pub fn subscribe_songs(&self) -> watch::Receiver<Vec<Song>> {
    self.trending_songs.subscribe()
  }

  pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
    self.is_loading.subscribe()
  }

  pub fn subscribe_error(&self) -> watch::Receiver<Option<String>> {
    self.error_message.subscribe()
  }

  pub async fn load_trending_songs(&self) {
    self.is_loading.send_replace(true);
    self.error_message.send_replace(None);

    match self.catalog.trending_songs().await {
      Ok(songs) => {
        debug!("Trending list updated with {} songs", songs.len());
        self.trending_songs.send_replace(songs);
      }
      Err(e) => {
        self.error_message.send_replace(Some(format!("Failed to load trending songs: {e}")));
      }
    }

    self.is_loading.send_replace(false);
  }

  pub async fn refresh(&self) {
    self.load_trending_songs().await
  }
}

impl<C: SongCatalog + 'static> TrendingViewModel<C> {
  /// Starts a load on the runtime and returns immediately.
  pub fn launch_load(self: &Arc<Self>) -> JoinHandle<()> {
    let vm = Arc::clone(self);
    tokio::spawn(async move { vm.load_trending_songs().await })
  }
}
