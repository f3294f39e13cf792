//! Lookup state machine.
//!
//! `Idle -> Searching -> {Success, Error}`. Every submit takes the next
//! sequence number while holding the view lock; a completion carrying an
//! older number is dropped so the display always reflects the latest submit.

use std::sync::Arc;

use lexi_provider::DictionaryProvider;
use lexi_types::{LookupError, LookupResult, LookupStatus, ViewSnapshot};
use tokio::sync::{Mutex, RwLock};

use crate::error::{SessionError, classify};
use crate::favorites::FavoritesStore;
use crate::normalize::normalize;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// What a single `submit` produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Success(LookupResult),
    Error(LookupError),
    /// A newer submit started before this one finished
    Stale,
}

#[derive(Default)]
struct ViewState {
    seq: u64,
    query: String,
    status: LookupStatus,
    is_favorite: bool,
}

pub struct LookupController {
    provider: Arc<dyn DictionaryProvider>,
    preprocessor: Box<dyn Preprocessor>,
    favorites: Mutex<FavoritesStore>,
    view: RwLock<ViewState>,
}

impl LookupController {
    pub fn new(provider: Arc<dyn DictionaryProvider>, favorites: FavoritesStore) -> Self {
        Self::with_preprocessor(provider, favorites, Box::new(DefaultPreprocessor))
    }

    pub fn with_preprocessor(
        provider: Arc<dyn DictionaryProvider>,
        favorites: FavoritesStore,
        preprocessor: Box<dyn Preprocessor>,
    ) -> Self {
        Self {
            provider,
            preprocessor,
            favorites: Mutex::new(favorites),
            view: RwLock::new(ViewState::default()),
        }
    }

    /// Run one lookup to completion. Blank queries fail with `EmptyQuery`
    /// without touching the provider.
    pub async fn submit(&self, query: &str) -> LookupOutcome {
        let word = self.preprocessor.process(query);

        let seq = {
            let mut view = self.view.write().await;
            view.seq += 1;
            view.query = query.to_string();
            view.is_favorite = false;

            if word.is_empty() {
                tracing::debug!("Rejecting blank query");
                view.status = LookupStatus::Error(LookupError::EmptyQuery);
                return LookupOutcome::Error(LookupError::EmptyQuery);
            }

            view.status = LookupStatus::Searching;
            view.seq
        };

        tracing::debug!("Lookup #{} for '{}'", seq, word);

        let outcome = match self.provider.fetch_entry(&word).await {
            Ok(entries) => normalize(&word, &entries),
            Err(e) => {
                tracing::debug!("Provider failed for '{}': {}", word, e);
                Err(classify(&e))
            }
        };

        let mut view = self.view.write().await;
        if view.seq != seq {
            tracing::info!(
                "Discarding stale lookup #{} for '{}' (latest is #{})",
                seq,
                word,
                view.seq
            );
            return LookupOutcome::Stale;
        }

        match outcome {
            Ok(result) => {
                view.is_favorite = self.favorites.lock().await.is_favorite(&result.word);
                tracing::info!(
                    "Found '{}': {} definitions, audio: {}",
                    result.word,
                    result.definitions.len(),
                    result.audio_url.is_some()
                );
                view.status = LookupStatus::Success(result.clone());
                LookupOutcome::Success(result)
            }
            Err(error) => {
                tracing::info!("Lookup for '{}' failed: {:?}", word, error);
                view.status = LookupStatus::Error(error);
                LookupOutcome::Error(error)
            }
        }
    }

    /// Recall a favorite by looking it up again
    pub async fn select_favorite(&self, word: &str) -> LookupOutcome {
        self.submit(word).await
    }

    /// Toggle the word currently on display. `None` when nothing is shown.
    pub async fn toggle_favorite(&self) -> Result<Option<bool>, SessionError> {
        let word = {
            let view = self.view.read().await;
            match view.status.result() {
                Some(result) => result.word.clone(),
                None => {
                    tracing::debug!("No word on display to toggle");
                    return Ok(None);
                }
            }
        };

        let now_favorite = self.favorites.lock().await.toggle(&word)?;

        let mut view = self.view.write().await;
        if view.status.result().is_some_and(|r| r.word == word) {
            view.is_favorite = now_favorite;
        }

        Ok(Some(now_favorite))
    }

    pub async fn favorites(&self) -> Vec<String> {
        self.favorites.lock().await.list()
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        let (query, status, is_favorite) = {
            let view = self.view.read().await;
            (view.query.clone(), view.status.clone(), view.is_favorite)
        };

        ViewSnapshot {
            query,
            status,
            is_favorite,
            favorites: self.favorites().await,
        }
    }
}
