use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefijo que marca una canción como procedente del catálogo en la nube.
pub const CLOUD_PREFIX: &str = "saavn:";

/// Identificador de una canción dentro de la aplicación.
///
/// Las canciones del catálogo remoto llevan el prefijo [`CLOUD_PREFIX`]
/// para no colisionar con los ids de la biblioteca local.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongId(String);

impl SongId {
  /// Construye el id de una canción remota a partir del id del proveedor.
  pub fn cloud(provider_id: &str) -> Self {
    SongId(format!("{CLOUD_PREFIX}{provider_id}"))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_cloud(&self) -> bool {
    self.0.starts_with(CLOUD_PREFIX)
  }

  /// Devuelve el id original del proveedor, si es una canción remota.
  pub fn provider_id(&self) -> Option<&str> {
    self.0.strip_prefix(CLOUD_PREFIX)
  }
}

impl From<String> for SongId {
  fn from(s: String) -> Self {
    SongId(s)
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistId(i64);

impl ArtistId {
  /// Id estable derivado de un texto (nombre o id externo).
  pub fn from_key(key: &str) -> Self {
    ArtistId(stable_hash(key))
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identificador de álbum. `0` significa "álbum desconocido".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumId(i64);

impl AlbumId {
  pub const UNKNOWN: AlbumId = AlbumId(0);

  pub fn from_key(key: &str) -> Self {
    AlbumId(stable_hash(key))
  }
}

impl fmt::Display for AlbumId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Hash polinómico (base 31) sobre unidades UTF-16, truncado a 32 bits.
///
/// Es estable entre ejecuciones y plataformas: el mismo nombre produce
/// siempre el mismo id.
pub fn stable_hash(key: &str) -> i64 {
  let h = key.encode_utf16().fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(unit as i32));
  h as i64
}
