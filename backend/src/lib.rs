pub mod infrastructure;
pub mod presentation;

use std::sync::Arc;

use cloudtune_saavn::{SaavnCatalog, SaavnConfig};
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use infrastructure::QueuePlayback;
use presentation::{TrendingScreen, TrendingViewModel};

/// Concrete screen type used by the binary.
pub type ConcreteTrendingScreen = TrendingScreen<SaavnCatalog, QueuePlayback>;

/// Log level comes from `LOG_LEVEL` (e.g. `debug`, `cloudtune_saavn=trace`).
pub fn init_tracing() -> anyhow::Result<()> {
  tracing_subscriber::registry()
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).with_env_var("LOG_LEVEL").from_env_lossy())
    .try_init()?;
  Ok(())
}

/// Reads the `[saavn]` section, falling back to defaults when the config
/// directory or file cannot be read or written.
pub fn load_config(base_url_override: Option<String>) -> SaavnConfig {
  let mut config = SaavnConfig::load().unwrap_or_else(|e| {
    warn!("Could not load config, using defaults: {e}");
    SaavnConfig::default()
  });

  if let Some(base_url) = base_url_override {
    config.base_url = base_url;
  }
  config
}

/// Application graph: catalog adapter, in-memory player, state holder and
/// screen, all sharing the same catalog.
pub struct App {
  pub config: SaavnConfig,
  pub catalog: Arc<SaavnCatalog>,
  pub playback: Arc<QueuePlayback>,
  pub trending: ConcreteTrendingScreen,
}

impl App {
  pub fn new(config: SaavnConfig) -> Self {
    // --- Dependency Injection Phase ---

    // 1. Catalog Adapter (HTTP)
    let catalog = Arc::new(SaavnCatalog::from_config(&config));

    // 2. Playback Adapter (in-memory queue)
    let playback = Arc::new(QueuePlayback::new());

    // 3. Presentation wiring
    let view_model = Arc::new(TrendingViewModel::new(Arc::clone(&catalog)));
    let trending = TrendingScreen::new(view_model, Arc::clone(&playback));

    Self { config, catalog, playback, trending }
  }
}
