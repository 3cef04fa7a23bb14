//! The process-wide theme handle.

use std::fmt;

use tracing::{debug, warn};

use super::store::ThemeStore;
use super::Theme;

/// Current theme plus the store it is persisted to.
///
/// There is exactly one per process. The app owns it and lends it to a
/// console session for the duration of one command.
pub struct ThemeContext {
    current: Theme,
    store: Box<dyn ThemeStore>,
}

impl ThemeContext {
    /// Pick the initial theme: stored value, then system preference, then
    /// dark. A failed read is logged and treated as "nothing stored".
    pub fn hydrate(store: Box<dyn ThemeStore>, system: Option<Theme>) -> Self {
        let stored = match store.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to read stored theme: {}", e);
                None
            }
        };

        let current = stored.or(system).unwrap_or_default();
        debug!(
            "Theme hydrated: {} (stored: {:?}, system: {:?})",
            current, stored, system
        );

        Self { current, store }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Set and persist. Every call writes the store exactly once.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(e) = self.store.save(theme) {
            warn!("Failed to persist theme '{}': {}", theme, e);
        }
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FolioResult, SystemError};
    use crate::theme::MemoryThemeStore;

    struct BrokenStore;

    impl ThemeStore for BrokenStore {
        fn load(&self) -> FolioResult<Option<Theme>> {
            Err(SystemError::NoHomeDirectory.into())
        }

        fn save(&mut self, _theme: Theme) -> FolioResult<()> {
            Err(SystemError::NoHomeDirectory.into())
        }
    }

    #[test]
    fn test_stored_value_wins() {
        let store = MemoryThemeStore::with_theme(Theme::Light);
        let ctx = ThemeContext::hydrate(Box::new(store), Some(Theme::Dark));
        assert_eq!(ctx.current(), Theme::Light);
    }

    #[test]
    fn test_system_preference_when_nothing_stored() {
        let ctx = ThemeContext::hydrate(Box::new(MemoryThemeStore::new()), Some(Theme::Light));
        assert_eq!(ctx.current(), Theme::Light);
    }

    #[test]
    fn test_defaults_to_dark() {
        let ctx = ThemeContext::hydrate(Box::new(MemoryThemeStore::new()), None);
        assert_eq!(ctx.current(), Theme::Dark);
    }

    #[test]
    fn test_hydrate_does_not_write() {
        let handle = MemoryThemeStore::new();
        let _ctx = ThemeContext::hydrate(Box::new(handle.clone()), Some(Theme::Light));
        assert_eq!(handle.writes(), 0);
    }

    #[test]
    fn test_set_writes_once() {
        let handle = MemoryThemeStore::new();
        let mut ctx = ThemeContext::hydrate(Box::new(handle.clone()), None);
        ctx.set(Theme::Dark);
        assert_eq!(handle.writes(), 1);
        assert_eq!(handle.stored(), Some(Theme::Dark));
    }

    #[test]
    fn test_broken_store_is_swallowed() {
        let mut ctx = ThemeContext::hydrate(Box::new(BrokenStore), Some(Theme::Light));
        assert_eq!(ctx.current(), Theme::Light);
        assert_eq!(ctx.toggle(), Theme::Dark);
        assert_eq!(ctx.current(), Theme::Dark);
    }
}
