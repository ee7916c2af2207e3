//! Application state for the roster engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::NicknameTable;

/// Shared application state.
///
/// Contains the immutable resources shared across all request handlers: the
/// nickname table loaded at startup and the directory converted files are
/// staged into.
#[derive(Clone)]
pub struct AppState {
    /// The loaded nickname table.
    nicknames: Arc<NicknameTable>,
    /// Directory converted workbooks are staged into.
    processed_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(nicknames: NicknameTable, processed_dir: PathBuf) -> Self {
        Self {
            nicknames: Arc::new(nicknames),
            processed_dir: Arc::new(processed_dir),
        }
    }

    /// Returns a reference to the nickname table.
    pub fn nicknames(&self) -> &NicknameTable {
        &self.nicknames
    }

    /// Returns the staging directory for converted workbooks.
    pub fn processed_dir(&self) -> &Path {
        &self.processed_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
