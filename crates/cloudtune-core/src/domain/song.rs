use crate::domain::artist::ArtistRef;
use crate::domain::ids::{AlbumId, ArtistId, SongId};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// La Canción (Song): representación uniforme dentro de la aplicación,
/// independiente del esquema de cualquier proveedor externo.
///
/// Una `Song` remota siempre tiene título y una URL de streaming válida;
/// los registros que no cumplen eso se descartan antes de llegar aquí.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
  pub id: SongId,
  pub title: String,
  /// Texto de artista tal cual se muestra (puede contener varios nombres).
  pub artist: String,
  pub artist_id: ArtistId,
  /// Créditos estructurados, con el intérprete principal marcado.
  pub artists: Vec<ArtistRef>,
  pub album: String,
  pub album_id: AlbumId,
  pub album_artist: String,
  /// URL de streaming para el reproductor.
  pub content_uri: String,
  pub album_art_uri: Option<String>,
  pub duration_ms: u64,
  pub genre: Option<String>,
  pub year: u32,
  pub track_number: u32,
  pub mime_type: String,
  pub is_favorite: bool,
  /// Timestamps UNIX en milisegundos.
  pub date_added_ms: u64,
  pub date_modified_ms: u64,
}

impl Song {
  /// Nombre a mostrar: los artistas principales si hay créditos
  /// estructurados, si no el texto original.
  pub fn display_artist(&self) -> String {
    let primary: Vec<&str> = self.artists.iter().filter(|a| a.is_primary).map(|a| a.name.as_str()).collect();

    if primary.is_empty() { self.artist.clone() } else { primary.join(", ") }
  }
}

#[cfg(test)]
pub(crate) mod fixtures {
  use super::*;

  pub fn song(provider_id: &str, title: &str) -> Song {
    Song {
      id: SongId::cloud(provider_id),
      title: title.to_string(),
      artist: UNKNOWN_ARTIST.to_string(),
      artist_id: ArtistId::from_key(UNKNOWN_ARTIST),
      artists: vec![],
      album: UNKNOWN_ALBUM.to_string(),
      album_id: AlbumId::UNKNOWN,
      album_artist: UNKNOWN_ARTIST.to_string(),
      content_uri: format!("https://cdn.example/{provider_id}.mp4"),
      album_art_uri: None,
      duration_ms: 0,
      genre: None,
      year: 0,
      track_number: 0,
      mime_type: "audio/mpeg".to_string(),
      is_favorite: false,
      date_added_ms: 0,
      date_modified_ms: 0,
    }
  }
}
