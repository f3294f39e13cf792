pub mod controller;
pub mod error;
pub mod favorites;
pub mod normalize;
pub mod preprocess;
pub mod session;
pub mod theme;

pub use controller::{LookupController, LookupOutcome};
pub use error::SessionError;
pub use favorites::{FavoritesSet, FavoritesStore};
pub use normalize::{MAX_DEFINITIONS, normalize};
pub use session::{MemorySessionStore, SessionStore};
pub use theme::ThemePreference;
