use std::sync::{Arc, Mutex};

use crate::common::StorageError;
use crate::models::Theme;

/// Where the chosen theme survives between sessions.
pub trait ThemeStorage {
    fn load(&self) -> Result<Option<Theme>, StorageError>;

    fn save(&mut self, theme: Theme) -> Result<(), StorageError>;
}

/// Holds the active theme. Built once at startup with [`ThemeStore::apply`];
/// [`ThemeStore::toggle`] is the only way to change it.
#[derive(Debug)]
pub struct ThemeStore<S> {
    storage: S,
    theme: Theme,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Restores the persisted theme, falling back to `fallback` when nothing
    /// was stored or the storage cannot be read.
    pub fn apply_or(storage: S, fallback: Theme) -> Self {
        let theme = match storage.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => fallback,
            Err(e) => {
                log::warn!("Could not read persisted theme: {}", e);
                fallback
            }
        };

        Self { storage, theme }
    }

    pub fn apply(storage: S) -> Self {
        Self::apply_or(storage, Theme::default())
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and persists it. The in-memory theme flips even when
    /// the write fails; the error is returned so callers can report it.
    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        self.theme = self.theme.toggled();
        log::debug!("Theme switched to {}", self.theme);

        self.storage.save(self.theme)?;

        Ok(self.theme)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// In-process storage. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStorage {
    slot: Arc<Mutex<Option<Theme>>>,
}

impl MemoryThemeStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(theme))),
        }
    }

    pub fn stored(&self) -> Option<Theme> {
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ThemeStorage for MemoryThemeStorage {
    fn load(&self) -> Result<Option<Theme>, StorageError> {
        Ok(self.stored())
    }

    fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(theme);

        Ok(())
    }
}
