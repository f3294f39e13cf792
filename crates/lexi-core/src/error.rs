use lexi_provider::ProviderError;
use lexi_types::LookupError;

/// Map a provider failure onto the user-facing taxonomy. Only an explicit
/// not-found signal stays `NotFound`; everything else is `Unusable`.
pub fn classify(error: &ProviderError) -> LookupError {
    if error.is_not_found() {
        LookupError::NotFound
    } else {
        LookupError::Unusable
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to serialize session value: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Session store write failed: {0}")]
    WriteFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(&ProviderError::NotFound), LookupError::NotFound);
        assert_eq!(
            classify(&ProviderError::ApiError("HTTP 500".to_string())),
            LookupError::Unusable
        );
        assert_eq!(
            classify(&ProviderError::ParseError("expected array".to_string())),
            LookupError::Unusable
        );
        assert_eq!(
            classify(&ProviderError::InvalidUrl("x".to_string())),
            LookupError::Unusable
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(LookupError::EmptyQuery.to_string(), "Enter a word to search");
        assert_eq!(LookupError::NotFound.to_string(), "Definition not found");
        assert_eq!(LookupError::Unusable.to_string(), "Definition not found");
    }
}
