//! In-memory storage backend for testing.
//!
//! Provides [`InMemoryStorage`], a thread-safe in-memory implementation
//! of the [`super::Storage`] trait. Ideal for unit tests where file I/O
//! is undesirable; it also counts saves so persistence behavior is
//! observable.

use std::sync::Mutex;

use crate::error::{Result, TallybookError};
use crate::models::AppState;

/// Thread-safe in-memory storage for testing.
///
/// # Example
///
/// ```rust
/// use tallybook::storage::InMemoryStorage;
/// use tallybook::store::Store;
///
/// let store = Store::open(InMemoryStorage::new()).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    /// All state behind a single mutex for thread-safe interior mutability.
    inner: Mutex<Inner>,
}

/// Inner mutable state.
#[derive(Debug, Default)]
struct Inner {
    /// The persisted state document, if any.
    state: Option<AppState>,
    /// Number of successful saves.
    save_count: usize,
}

impl InMemoryStorage {
    /// Creates a new empty in-memory storage.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many times [`super::Storage::save`] has succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the inner lock is poisoned.
    #[inline]
    pub fn save_count(&self) -> Result<usize> {
        self.with_lock(|inner| inner.save_count)
    }

    /// Acquires the inner lock and applies a closure.
    fn with_lock<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> Result<R> {
        let mut inner = self.inner.lock().map_err(|err| lock_error(&err))?;
        Ok(f(&mut inner))
    }
}

/// Wraps a mutex poison error.
fn lock_error<T>(err: &std::sync::PoisonError<T>) -> TallybookError {
    TallybookError::Storage(err.to_string().into())
}

impl super::Storage for InMemoryStorage {
    #[inline]
    fn load(&self) -> Result<Option<AppState>> {
        self.with_lock(|inner| inner.state.clone())
    }

    #[inline]
    fn save(&self, state: &AppState) -> Result<()> {
        self.with_lock(|inner| {
            inner.state = Some(state.clone());
            inner.save_count += 1;
        })
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.with_lock(|inner| inner.state = None)
    }
}
