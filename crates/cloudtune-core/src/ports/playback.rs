use async_trait::async_trait;

use crate::domain::{Song, SongId};
use crate::errors::CoreError;

/// Port hacia el reproductor.
///
/// La pantalla sólo reenvía las acciones del usuario; el reproductor
/// decide cómo aplicarlas (cola, foco de audio, notificaciones, etc.).
#[async_trait]
pub trait Playback: Send + Sync {
  /// Reemplaza la cola con `songs` y empieza en `start_index`.
  async fn play_songs(&self, songs: Vec<Song>, start_index: usize) -> Result<(), CoreError>;
  async fn add_to_queue_next(&self, song: Song) -> Result<(), CoreError>;
  async fn add_to_queue(&self, song: Song) -> Result<(), CoreError>;
  async fn toggle_favorite(&self, id: &SongId) -> Result<(), CoreError>;
}
