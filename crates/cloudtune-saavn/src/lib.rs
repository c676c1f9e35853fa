pub mod adapter;
pub mod api;
pub mod config;
pub mod mapper;
pub mod models;
pub mod repository;

pub use adapter::SaavnCatalog;
pub use api::{ApiError, HttpSaavnApi, SaavnApi};
pub use config::SaavnConfig;
pub use mapper::{map_song, map_songs};
pub use repository::{RepositoryError, SaavnRepository};
