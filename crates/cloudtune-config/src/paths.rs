use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Variable de entorno para un modo "portable": todo cuelga de un único directorio.
pub const BASE_DIR_ENV: &str = "CLOUDTUNE_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Sólo guardamos configuración: no hay base de datos ni caché en disco.
#[derive(Debug, Clone)]
pub struct CloudtunePaths {
  pub config_dir: PathBuf,
}

impl CloudtunePaths {
  /// Resuelve el directorio de configuración y lo crea si no existe.
  pub fn detect() -> Result<Self, ConfigError> {
    let config_dir = match std::env::var(BASE_DIR_ENV) {
      Ok(env_base) => PathBuf::from(env_base).join("config"),
      Err(_) => {
        let proj_dirs = ProjectDirs::from("com", "cloudtune", "cloudtune").ok_or(ConfigError::Directories)?;
        proj_dirs.config_dir().to_path_buf()
      }
    };

    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { config_dir })
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("cloudtune.toml")
  }
}
