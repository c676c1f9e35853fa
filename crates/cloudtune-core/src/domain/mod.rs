pub mod artist;
pub mod ids;
pub mod song;

pub use artist::ArtistRef;
pub use ids::{AlbumId, ArtistId, SongId};
pub use song::Song;
