use std::sync::Arc;

use crate::error::SessionError;
use crate::session::SessionStore;

/// Dark mode flag kept in the session store as `"true"` / `"false"`
pub struct ThemePreference {
    dark_mode: bool,
    store: Arc<dyn SessionStore>,
    key: String,
}

impl ThemePreference {
    pub fn load(store: Arc<dyn SessionStore>, key: impl Into<String>, default: bool) -> Self {
        let key = key.into();
        let dark_mode = match store.get(&key).as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => default,
        };

        Self {
            dark_mode,
            store,
            key,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle(&mut self) -> Result<bool, SessionError> {
        let next = !self.dark_mode;
        self.store.set(&self.key, next.to_string())?;
        self.dark_mode = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_defaults_when_absent_or_garbage() {
        let theme = ThemePreference::load(Arc::new(MemorySessionStore::new()), "darkMode", false);
        assert!(!theme.dark_mode());

        let session = Arc::new(MemorySessionStore::with_values([("darkMode", "maybe")]));
        let theme = ThemePreference::load(session, "darkMode", true);
        assert!(theme.dark_mode());
    }

    #[test]
    fn test_toggle_persists() {
        let session = Arc::new(MemorySessionStore::with_values([("darkMode", "false")]));
        let mut theme = ThemePreference::load(session.clone(), "darkMode", false);

        assert!(theme.toggle().unwrap());
        assert_eq!(session.get("darkMode").as_deref(), Some("true"));

        assert!(!theme.toggle().unwrap());
        assert_eq!(session.get("darkMode").as_deref(), Some("false"));
    }
}
