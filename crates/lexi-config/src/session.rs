use serde::{Deserialize, Serialize};

fn default_favorites_key() -> String {
    "favorites".to_string()
}

fn default_theme_key() -> String {
    "darkMode".to_string()
}

/// Keys used in the session-scoped key-value store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            favorites_key: default_favorites_key(),
            theme_key: default_theme_key(),
        }
    }
}
