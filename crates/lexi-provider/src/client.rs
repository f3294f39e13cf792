use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::dto::RawEntry;
use crate::{DictionaryProvider, ProviderError, ProviderMetadata};

/// Client for the Free Dictionary API (dictionaryapi.dev)
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl FreeDictionaryClient {
    pub fn new(
        base_url: String,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self::with_http_client(client, base_url))
    }

    pub fn with_http_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Append `word` to the base URL as one path segment
    fn entry_url(&self, word: &str) -> Result<Url, ProviderError> {
        // URL normalization drops `.` and `..` path segments
        if matches!(word, "." | "..") {
            return Err(ProviderError::NotFound);
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }
}

#[async_trait]
impl DictionaryProvider for FreeDictionaryClient {
    async fn fetch_entry(&self, word: &str) -> Result<Vec<RawEntry>, ProviderError> {
        let url = self.entry_url(word)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound);
        }

        if !status.is_success() {
            return Err(ProviderError::ApiError(format!("HTTP {}", status)));
        }

        response
            .json::<Vec<RawEntry>>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Free Dictionary API".to_string(),
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::extract::{Path, State};
    use axum::http::StatusCode as HttpStatus;
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use tokio::net::TcpListener;

    use super::*;

    const WORD_BODY: &str = r#"[{"word":"word","phonetics":[],"meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"A unit of language."}]}]}]"#;
    const NOT_FOUND_BODY: &str =
        r#"{"title":"No Definitions Found","message":"Sorry pal","resolution":"Try again"}"#;

    /// Words the server was asked for, decoded from the path
    #[derive(Clone, Default)]
    struct ServerState {
        requested: Arc<Mutex<Vec<String>>>,
    }

    impl ServerState {
        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    async fn handle_entry(State(state): State<ServerState>, Path(word): Path<String>) -> Response {
        state.requested.lock().unwrap().push(word.clone());

        let (status, body) = match word.as_str() {
            "word" | "ice cream" => (HttpStatus::OK, WORD_BODY),
            "boom" => (HttpStatus::INTERNAL_SERVER_ERROR, "{}"),
            "odd" => (HttpStatus::OK, r#"{"title":"odd"}"#),
            _ => (HttpStatus::NOT_FOUND, NOT_FOUND_BODY),
        };

        (status, [("content-type", "application/json")], body).into_response()
    }

    async fn spawn_dictionary_server() -> (String, ServerState) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = ServerState::default();

        let app = Router::new()
            .route("/api/v2/entries/en/:word", get(handle_entry))
            .with_state(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        (format!("http://{addr}/api/v2/entries/en"), state)
    }

    fn test_client(base_url: String) -> FreeDictionaryClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        FreeDictionaryClient::with_http_client(http, base_url)
    }

    #[test]
    fn test_entry_url_encodes_word() {
        let client = test_client("https://api.dictionaryapi.dev/api/v2/entries/en".to_string());
        let url = client.entry_url("ice cream").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream"
        );

        let url = client.entry_url("a/b").unwrap();
        assert!(url.as_str().ends_with("/en/a%2Fb"));
    }

    #[test]
    fn test_entry_url_trailing_slash() {
        let client = test_client("http://localhost:8080/entries/".to_string());
        let url = client.entry_url("word").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/entries/word");
    }

    #[test]
    fn test_entry_url_invalid_base() {
        let client = test_client("not a url".to_string());
        assert!(matches!(
            client.entry_url("word"),
            Err(ProviderError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_entry_url_dot_segments_have_no_entry() {
        let client = test_client("https://api.dictionaryapi.dev/api/v2/entries/en".to_string());
        for word in [".", ".."] {
            let err = client.entry_url(word).unwrap_err();
            assert!(err.is_not_found(), "word {word:?}");
        }

        let url = client.entry_url("...").unwrap();
        assert!(url.as_str().ends_with("/en/..."));
    }

    #[tokio::test]
    async fn test_fetch_success_returns_payload() {
        let (base_url, server) = spawn_dictionary_server().await;
        let client = test_client(base_url);

        let entries = client.fetch_entry("word").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word.as_deref(), Some("word"));

        // Same client, second request over the pooled connection
        client.fetch_entry("ice cream").await.unwrap();
        assert_eq!(server.requested(), vec!["word", "ice cream"]);
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let (base_url, server) = spawn_dictionary_server().await;

        let err = test_client(base_url).fetch_entry("ttt").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(server.requested(), vec!["ttt"]);
    }

    #[tokio::test]
    async fn test_fetch_dot_word_sends_nothing() {
        let (base_url, server) = spawn_dictionary_server().await;

        let err = test_client(base_url).fetch_entry("..").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(server.requested().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_not_not_found() {
        let (base_url, _server) = spawn_dictionary_server().await;

        let err = test_client(base_url).fetch_entry("boom").await.unwrap_err();
        assert!(matches!(err, ProviderError::ApiError(_)));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_unexpected_shape() {
        let (base_url, _server) = spawn_dictionary_server().await;

        let err = test_client(base_url).fetch_entry("odd").await.unwrap_err();
        assert!(matches!(err, ProviderError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = test_client(format!("http://{addr}/entries"))
            .fetch_entry("word")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NetworkError(_)));
    }
}
