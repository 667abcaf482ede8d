//! Shared test utilities for `SwipeCard` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::manager::CONFIG_HOME_ENV;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the `SWIPECARD_HOME` environment variable.
static CONFIG_HOME_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points `SWIPECARD_HOME` at a temp directory for a test scope
/// and restores the original value when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because another
/// thread may read the environment concurrently. The guard holds
/// `CONFIG_HOME_LOCK` for its whole lifetime, so only one test at a time
/// touches the variable, and the original value is restored on drop (including
/// on panic).
pub struct ConfigHomeGuard {
    original: Option<String>,
    // Held for the lifetime of the guard
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under a global lock"
)]
impl ConfigHomeGuard {
    /// Create a new guard that sets `SWIPECARD_HOME` to the given temp directory path.
    pub fn new(temp_dir: &TempDir) -> Self {
        // A previous test panicking while holding the lock doesn't invalidate it
        let lock = CONFIG_HOME_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var(CONFIG_HOME_ENV).ok();
        // SAFETY: CONFIG_HOME_LOCK serializes every writer of this variable and
        // the guard restores it on drop. See struct-level documentation.
        unsafe {
            std::env::set_var(CONFIG_HOME_ENV, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under a global lock"
)]
impl Drop for ConfigHomeGuard {
    fn drop(&mut self) {
        // SAFETY: still holding CONFIG_HOME_LOCK; see struct-level documentation.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(CONFIG_HOME_ENV, original);
            }
        } else {
            unsafe {
                std::env::remove_var(CONFIG_HOME_ENV);
            }
        }
    }
}
