// crates/cloudtune-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo.
///
/// Las capas superiores (pantalla, CLI, etc.) deberían mapear este error
/// a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("playback error: {0}")]
  Playback(String),

  #[error("not found")]
  NotFound,
}

