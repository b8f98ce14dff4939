//! Navigation capability used for the redirect-on-401 side effect.

use std::sync::{Mutex, PoisonError};

/// Entry point the user is sent to when their session expires.
pub const LOGIN_PATH: &str = "/login";

/// Performs a full navigation to `path`. Supplied by the embedding UI.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Records navigations instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path navigated to, oldest first.
    pub fn visits(&self) -> Vec<String> {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self, path: &str) -> usize {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|p| *p == path)
            .count()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}
