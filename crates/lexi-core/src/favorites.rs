use std::collections::HashSet;
use std::sync::Arc;

use crate::error::SessionError;
use crate::session::SessionStore;

/// Insertion-ordered set of words. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a sequence, keeping the first occurrence of repeats
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut set = Self::new();
        for word in words {
            set.insert(word);
        }
        set
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Returns false if the word was already present
    pub fn insert(&mut self, word: String) -> bool {
        if !self.index.insert(word.clone()) {
            return false;
        }
        self.order.push(word);
        true
    }

    /// Returns false if the word was not present
    pub fn remove(&mut self, word: &str) -> bool {
        if !self.index.remove(word) {
            return false;
        }
        self.order.retain(|w| w != word);
        true
    }

    /// Flip membership, returning the new state
    pub fn toggle(&mut self, word: &str) -> bool {
        if self.remove(word) {
            false
        } else {
            self.insert(word.to_string())
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }
}

/// In-memory mirror of the favorites persisted in the session store
pub struct FavoritesStore {
    set: FavoritesSet,
    store: Arc<dyn SessionStore>,
    key: String,
}

impl FavoritesStore {
    /// Read the persisted sequence once. Absent or malformed data yields an
    /// empty set.
    pub fn load(store: Arc<dyn SessionStore>, key: impl Into<String>) -> Self {
        let key = key.into();

        let set = match store.get(&key) {
            None => FavoritesSet::new(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(words) => FavoritesSet::from_words(words),
                Err(e) => {
                    tracing::warn!("Ignoring malformed favorites under '{}': {}", key, e);
                    FavoritesSet::new()
                }
            },
        };

        tracing::debug!("Loaded {} favorites", set.len());
        Self { set, store, key }
    }

    pub fn is_favorite(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    /// Flip membership and persist the whole sequence before returning.
    /// A failed write leaves the set unchanged.
    pub fn toggle(&mut self, word: &str) -> Result<bool, SessionError> {
        let mut next = self.set.clone();
        let now_favorite = next.toggle(word);

        let serialized = serde_json::to_string(&next.order)?;
        self.store.set(&self.key, serialized)?;
        self.set = next;

        tracing::debug!("Favorite '{}' -> {}", word, now_favorite);
        Ok(now_favorite)
    }

    pub fn list(&self) -> Vec<String> {
        self.set.to_vec()
    }
}
