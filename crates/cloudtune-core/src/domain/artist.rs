use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};

/// Referencia a un artista acreditado en una canción.
///
/// No es la entidad completa del artista: sólo lo necesario para mostrar
/// créditos y agrupar por artista.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
  pub id: ArtistId,
  pub name: String,
  /// Intérprete principal (frente a invitados, compositores, etc.).
  pub is_primary: bool,
}

impl ArtistRef {
  pub fn new(id: ArtistId, name: impl Into<String>, is_primary: bool) -> Self {
    Self { id, name: name.into(), is_primary }
  }
}
