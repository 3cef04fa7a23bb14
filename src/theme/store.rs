//! Theme persistence.
//!
//! The file store keeps a small JSON settings object at
//! `<data_dir>/settings.json`; only the `theme` key belongs to us and any
//! other keys are written back untouched.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde_json::{Map, Value};

use super::Theme;
use crate::error::{classify_io_error, FolioError, FolioResult, SystemError};

/// The settings file name inside the data directory.
pub const SETTINGS_FILE: &str = "settings.json";

const THEME_KEY: &str = "theme";

/// Where the selected theme is remembered between runs.
pub trait ThemeStore {
    /// The stored theme, `None` when nothing (or nothing valid) is stored.
    fn load(&self) -> FolioResult<Option<Theme>>;

    fn save(&mut self, theme: Theme) -> FolioResult<()>;
}

/// JSON key-value settings file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SETTINGS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_settings(&self) -> FolioResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| classify_io_error(e, Some(self.path.clone()), "read settings"))?;

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Ok(Map::new()),
            Err(e) => Err(SystemError::IoError {
                operation: "parse settings".to_string(),
                path: Some(self.path.clone()),
                message: e.to_string(),
            }
            .into()),
        }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> FolioResult<Option<Theme>> {
        let settings = self.read_settings()?;
        Ok(settings
            .get(THEME_KEY)
            .and_then(Value::as_str)
            .and_then(|value| value.parse().ok()))
    }

    fn save(&mut self, theme: Theme) -> FolioResult<()> {
        // An unreadable file is replaced rather than blocking the write.
        let mut settings = self.read_settings().unwrap_or_default();
        settings.insert(THEME_KEY.to_string(), Value::from(theme.as_str()));

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    FolioError::from(SystemError::DirectoryCreationFailed {
                        path: parent.to_path_buf(),
                        message: e.to_string(),
                    })
                })?;
            }
        }

        let io_err = |e| classify_io_error(e, Some(self.path.clone()), "write settings");
        let file = File::create(&self.path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &Value::Object(settings)).map_err(|e| {
            SystemError::IoError {
                operation: "write settings".to_string(),
                path: Some(self.path.clone()),
                message: e.to_string(),
            }
        })?;
        writer.flush().map_err(io_err)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    theme: Option<Theme>,
    writes: usize,
}

/// Non-persistent store. Clones share the same slot, so a handle kept
/// outside a [`super::ThemeContext`] can observe what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        let store = Self::default();
        store.state.borrow_mut().theme = Some(theme);
        store
    }

    pub fn stored(&self) -> Option<Theme> {
        self.state.borrow().theme
    }

    /// Number of `save` calls so far.
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> FolioResult<Option<Theme>> {
        Ok(self.stored())
    }

    fn save(&mut self, theme: Theme) -> FolioResult<()> {
        let mut state = self.state.borrow_mut();
        state.theme = Some(theme);
        state.writes += 1;
        Ok(())
    }
}
