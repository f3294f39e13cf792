use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use lexi_config::Config;
use lexi_core::{FavoritesStore, LookupController, MemorySessionStore, SessionStore, ThemePreference};
use lexi_provider::{DictionaryProvider, FreeDictionaryClient};
use tokio::sync::Mutex;

pub struct AppState {
    pub engine: LookupController,
    pub theme: Mutex<ThemePreference>,
}

impl AppState {
    /// Build the state against the configured HTTP provider and a fresh
    /// session store that lives as long as the process
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let provider = FreeDictionaryClient::new(
            config.provider.base_url.clone(),
            Duration::from_secs(config.provider.timeout_seconds),
            &config.provider.user_agent,
        )
        .context("Failed to build dictionary client")?;

        let metadata = provider.metadata();
        tracing::info!("Using {} at {}", metadata.name, metadata.base_url);

        Ok(Self::new(
            &config,
            Arc::new(provider),
            Arc::new(MemorySessionStore::new()),
        ))
    }

    pub fn new(
        config: &Config,
        provider: Arc<dyn DictionaryProvider>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        let favorites = FavoritesStore::load(session.clone(), config.session.favorites_key.clone());
        let theme = ThemePreference::load(
            session,
            config.session.theme_key.clone(),
            config.ui.dark_mode_default,
        );

        Self {
            engine: LookupController::new(provider, favorites),
            theme: Mutex::new(theme),
        }
    }
}
