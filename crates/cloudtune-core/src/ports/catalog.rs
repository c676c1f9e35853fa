use async_trait::async_trait;

use crate::domain::Song;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
  /// Falló la llamada de listado / búsqueda / detalle.
  #[error("{0}")]
  Request(String),
}

/// Port de catálogo de canciones remoto.
///
/// Las implementaciones ya devuelven canciones de dominio: el mapeo
/// desde el esquema del proveedor y el enriquecimiento con detalles
/// ocurren dentro del adapter.
///
/// Un fallo por canción individual nunca llega hasta aquí; sólo falla
/// la operación completa cuando la llamada principal falla.
#[async_trait]
pub trait SongCatalog: Send + Sync {
  async fn trending_songs(&self) -> Result<Vec<Song>, CatalogError>;

  /// Una consulta vacía devuelve una lista vacía sin tocar la red.
  async fn search_songs(&self, query: &str, limit: u32) -> Result<Vec<Song>, CatalogError>;

  async fn song_detail(&self, provider_id: &str) -> Result<Option<Song>, CatalogError>;
}
