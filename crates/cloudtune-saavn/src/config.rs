use cloudtune_config::{ConfigBackend, ConfigError, TomlConfigBackend, config_backend};
use serde::{Deserialize, Serialize};

const SECTION: &str = "saavn";

pub const DEFAULT_BASE_URL: &str = "https://jiosaavn-m02hizdkx-dcode9s-projects.vercel.app";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SaavnConfig {
  /// API root; a trailing slash is ignored.
  #[serde(default = "default_base_url")]
  pub base_url: String,

  /// Language of the trending module.
  #[serde(default = "default_language")]
  pub language: String,

  /// Results per search page.
  #[serde(default = "default_search_limit")]
  pub search_limit: u32,

  /// Upper bound on simultaneous detail calls.
  #[serde(default = "default_max_concurrent_detail_calls")]
  pub max_concurrent_detail_calls: usize,
}

fn default_base_url() -> String {
  DEFAULT_BASE_URL.to_string()
}

fn default_language() -> String {
  "en".to_string()
}

fn default_search_limit() -> u32 {
  20
}

fn default_max_concurrent_detail_calls() -> usize {
  5
}

impl Default for SaavnConfig {
  fn default() -> Self {
    SaavnConfig {
      base_url: default_base_url(),
      language: default_language(),
      search_limit: default_search_limit(),
      max_concurrent_detail_calls: default_max_concurrent_detail_calls(),
    }
  }
}

impl SaavnConfig {
  /// Reads `[saavn]` from the user config file and writes it back with any
  /// missing keys filled in.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(config_backend()?)
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  /// Never less than one call per group.
  pub fn detail_batch_size(&self) -> usize {
    self.max_concurrent_detail_calls.max(1)
  }
}
