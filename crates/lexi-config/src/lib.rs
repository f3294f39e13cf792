use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::provider::ProviderConfig;
use self::session::SessionConfig;
use self::ui::UiConfig;

pub mod provider;
pub mod session;
pub mod ui;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub session: SessionConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Load a JSON config file, falling back to defaults when the file does
    /// not exist. Sections missing from the file get defaults and
    /// environment variables override file values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    fn load_with(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let data = fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&data)?;
            tracing::info!("Loaded config from {}", path.display());
            config
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Config::default()
        };

        config.provider.apply_overrides(lookup);
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}
