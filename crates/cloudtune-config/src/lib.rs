mod backend;
mod io;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use io::atomic_write_str;
pub use paths::{BASE_DIR_ENV, CloudtunePaths, ConfigError};

use once_cell::sync::OnceCell;

// Singleton del backend de config. Un fallo no queda cacheado: la siguiente
// llamada vuelve a intentar resolver los paths.
static CONFIG_BACKEND: OnceCell<TomlConfigBackend> = OnceCell::new();

pub fn config_backend() -> Result<&'static TomlConfigBackend, ConfigError> {
  CONFIG_BACKEND.get_or_try_init(|| CloudtunePaths::detect().map(TomlConfigBackend::new))
}
