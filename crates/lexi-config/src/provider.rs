use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("lexi/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Dictionary provider endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Entries endpoint, the word is appended as the last path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Transport timeout, the engine itself never times out
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ProviderConfig {
    /// Override fields from `DICTIONARY_API_URL` and
    /// `DICTIONARY_TIMEOUT_SECONDS`. Unparseable timeouts are ignored with a warning
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup("DICTIONARY_API_URL") {
            self.base_url = base_url;
        }

        if let Some(raw) = lookup("DICTIONARY_TIMEOUT_SECONDS") {
            match raw.parse() {
                Ok(timeout_seconds) => self.timeout_seconds = timeout_seconds,
                Err(e) => tracing::warn!("Ignoring DICTIONARY_TIMEOUT_SECONDS={}: {}", raw, e),
            }
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
