//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use folio::app::{App, UrlOpener};
use folio::console::EffectSink;
use folio::content::{Anchor, Catalog, ExternalLink, PostFilter, Route};
use folio::error::{FolioResult, UiError};
use folio::theme::{MemoryThemeStore, Theme, ThemeContext};

/// Records every target it is asked to open. Clones share the record.
#[derive(Clone, Default)]
pub struct RecordingOpener {
    opened: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// An opener that records, then refuses.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&mut self, target: &str) -> FolioResult<()> {
        self.opened.borrow_mut().push(target.to_string());
        if self.fail {
            return Err(UiError::OpenFailed {
                target: target.to_string(),
                message: "no handler".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Builds an [`App`] over the embedded catalog with in-memory theme storage.
pub struct TestAppBuilder {
    delay: Duration,
    system_theme: Option<Theme>,
    opener: RecordingOpener,
    store: MemoryThemeStore,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
            system_theme: None,
            opener: RecordingOpener::new(),
            store: MemoryThemeStore::new(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_opener(mut self, opener: RecordingOpener) -> Self {
        self.opener = opener;
        self
    }

    pub fn with_store(mut self, store: MemoryThemeStore) -> Self {
        self.store = store;
        self
    }

    pub fn build(self) -> App {
        let theme = ThemeContext::hydrate(Box::new(self.store), self.system_theme);
        App::new(
            Catalog::load_embedded().unwrap(),
            theme,
            Box::new(self.opener),
            self.delay,
            Path::new("/tmp/folio-tests"),
        )
        .unwrap()
    }
}

pub fn test_app() -> App {
    TestAppBuilder::new().build()
}

/// Type `line` into the active console and press Enter.
pub fn submit(app: &mut App, line: &str) {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    app.handle_paste(line);
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
}

/// Render, then let every released effect through.
pub fn settle(app: &mut App) {
    let now = std::time::Instant::now();
    app.mark_rendered(now);
    app.flush_effects(now);
}

/// Sink that records what it was told to do.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<String>,
}

impl EffectSink for RecordingSink {
    fn scroll_to(&mut self, anchor: Anchor) {
        self.calls.push(format!("scroll {}", anchor));
    }

    fn navigate(&mut self, route: Route) {
        self.calls.push(format!("navigate {}", route));
    }

    fn open_external(&mut self, link: ExternalLink) {
        self.calls.push(format!("open {}", link.target));
    }

    fn apply_filter(&mut self, filter: PostFilter) {
        self.calls.push(format!("filter {:?}", filter));
    }

    fn reset_filter(&mut self) {
        self.calls.push("reset".to_string());
    }
}
