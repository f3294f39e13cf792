use serde::{Deserialize, Serialize};

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    #[serde(default)]
    pub dark_mode_default: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
            dark_mode_default: false,
        }
    }
}
