//! Pluggable storage backends for persisting the application state.
//!
//! The whole [`AppState`] is persisted as one JSON document; there is no
//! partial write. A backend that returns `Ok(None)` from [`Storage::load`]
//! signals "nothing persisted yet" and the store falls back to defaults.

#[cfg(feature = "storage-file")]
mod file;
mod memory;

#[cfg(feature = "storage-file")]
pub use file::FileStorage;
pub use memory::InMemoryStorage;

use crate::error::Result;
use crate::models::AppState;

/// Storage backend for persisting the application state.
///
/// All methods take `&self` — implementations should use interior
/// mutability (e.g. `Mutex`) for thread-safe mutation.
pub trait Storage: core::fmt::Debug + Send + Sync {
    /// Returns the persisted state, or `Ok(None)` if nothing has been
    /// persisted yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read or the persisted
    /// document cannot be decoded.
    fn load(&self) -> Result<Option<AppState>>;

    /// Persists the full state, replacing any previous document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn save(&self, state: &AppState) -> Result<()>;

    /// Removes the persisted state, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn clear(&self) -> Result<()>;
}
