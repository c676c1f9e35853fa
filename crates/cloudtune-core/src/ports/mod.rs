pub mod catalog;
pub mod playback;

pub use catalog::{CatalogError, SongCatalog};
pub use playback::Playback;
