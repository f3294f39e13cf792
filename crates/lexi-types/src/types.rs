use serde::Serialize;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    ShowView(ViewSnapshot),
    ShowFavorites(Vec<String>),
    ThemeChanged { dark_mode: bool },
    StatusUpdate(String),
    BackendReady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Submit(String),
    ToggleFavorite,
    SelectFavorite(String),
    ListFavorites,
    ToggleTheme,
    Close,
}

/// One dictionary sense
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub text: String,
    pub example: Option<String>,
}

/// Normalized outcome of a successful lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub word: String,
    pub definitions: Vec<Definition>,
    pub audio_url: Option<String>,
}

/// Classified lookup failure. `Display` is the text shown to the user;
/// `NotFound` and `Unusable` intentionally share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Enter a word to search")]
    EmptyQuery,

    #[error("Definition not found")]
    NotFound,

    #[error("Definition not found")]
    Unusable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LookupStatus {
    #[default]
    Idle,
    Searching,
    Success(LookupResult),
    Error(LookupError),
}

impl LookupStatus {
    pub fn result(&self) -> Option<&LookupResult> {
        match self {
            LookupStatus::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<LookupError> {
        match self {
            LookupStatus::Error(error) => Some(*error),
            _ => None,
        }
    }
}

/// Everything the presentation layer may read after an engine call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub query: String,
    pub status: LookupStatus,
    pub is_favorite: bool,
    pub favorites: Vec<String>,
}

impl ViewSnapshot {
    /// Word the favorite toggle currently acts on
    pub fn current_word(&self) -> Option<&str> {
        self.status.result().map(|r| r.word.as_str())
    }
}
