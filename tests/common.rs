#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use url::Url;

use dashboard_login::common::{AuthError, StorageError};
use dashboard_login::config::default_redirect_url;
use dashboard_login::models::Theme;
use dashboard_login::services::{AuthProvider, MockAuthProvider, ThemeStorage};

pub const REDIRECT_URL: &str = "https://kvothe73.github.io/dashboard-startup";

pub fn redirect_url() -> Url {
    default_redirect_url()
}

/// Wraps the mock provider and counts how often it is asked.
#[derive(Default)]
pub struct CountingAuth {
    inner: MockAuthProvider,
    calls: AtomicUsize,
}

impl CountingAuth {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AuthProvider for CountingAuth {
    fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.authenticate(username, password)
    }
}

/// Storage that records every write and can be told to fail.
#[derive(Default)]
pub struct RecordingStorage {
    pub initial: Option<Theme>,
    pub saved: Vec<Theme>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl ThemeStorage for RecordingStorage {
    fn load(&self) -> Result<Option<Theme>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable);
        }
        Ok(self.initial)
    }

    fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("disk full".into()));
        }
        self.saved.push(theme);
        Ok(())
    }
}
