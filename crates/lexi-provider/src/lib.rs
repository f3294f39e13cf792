mod client;
pub mod dto;

pub use client::FreeDictionaryClient;
pub use dto::{RawDefinition, RawEntry, RawMeaning, RawPhonetic};

/// Dictionary provider interface.
///
/// One call is one outbound request; implementations never retry.
#[async_trait::async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Fetch the raw entries for `word`. The payload is returned as decoded,
    /// shaping it is the caller's job.
    async fn fetch_entry(&self, word: &str) -> Result<Vec<RawEntry>, ProviderError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("No entry for word")]
    NotFound,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ProviderError {
    /// Only an explicit "no such word" signal counts as not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound)
    }
}
