//! JSON-file-based storage backend.
//!
//! Stores the whole application state in a single JSON file under a
//! configurable directory (default: `$XDG_DATA_HOME/tallybook/`).

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, TallybookError};
use crate::models::AppState;

/// Application name used for the XDG data directory.
const APP_NAME: &str = "tallybook";

/// File holding the persisted state document.
const STATE_FILE: &str = "state.json";
/// Sentinel file used for cross-process file locking.
const LOCK_FILE: &str = "storage.lock";

/// File-backed storage that persists the state as a JSON document.
///
/// # Concurrency
///
/// Thread safety within a single process is provided by an in-process
/// [`Mutex`]. Cross-process safety is achieved via an advisory file lock
/// on `storage.lock` (using [`std::fs::File::lock`] /
/// [`std::fs::File::lock_shared`]).
///
/// Reads acquire a shared lock (allowing concurrent readers), writes an
/// exclusive lock.
///
/// # File layout
///
/// ```text
/// <dir>/
///   storage.lock   (cross-process lock sentinel)
///   state.json
/// ```
#[derive(Debug)]
pub struct FileStorage {
    /// Directory containing the state document and lock sentinel.
    dir: PathBuf,
    /// Mutex serializing concurrent in-process access.
    lock: Mutex<()>,
    /// Sentinel file for cross-process advisory locking.
    lock_file: fs::File,
}

impl FileStorage {
    /// Creates a new file storage rooted at the given directory.
    ///
    /// Creates the directory (and parents) if it does not exist. Also
    /// opens (or creates) the `storage.lock` sentinel file used for
    /// cross-process advisory locking.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the lock
    /// file cannot be opened.
    #[inline]
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).map_err(storage_io_error)?;
        let lock_file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(dir.join(LOCK_FILE))
            .map_err(storage_io_error)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
            lock_file,
        })
    }

    /// Returns the default XDG-compliant data directory for this application.
    ///
    /// On Linux: `$XDG_DATA_HOME/tallybook/` (typically
    /// `~/.local/share/tallybook/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be determined.
    #[inline]
    pub fn default_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|data_path| data_path.join(APP_NAME))
            .ok_or_else(|| {
                TallybookError::Storage("could not determine platform data directory".into())
            })
    }

    // ── Private helpers ─────────────────────────────────────────────

    /// Returns the full path for a given file name.
    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Acquires an in-process mutex guard and a shared (read) file lock,
    /// executes `op`, then releases the file lock.
    fn with_shared_lock<R, F: FnOnce() -> Result<R>>(&self, op: F) -> Result<R> {
        let _guard: MutexGuard<'_, ()> = self.lock.lock().map_err(|err| lock_poison_error(&err))?;
        self.lock_file.lock_shared().map_err(storage_io_error)?;
        let result = op();
        // Only surface the unlock error when the operation succeeded;
        // otherwise the original error is more useful.
        if let Err(err) = self.lock_file.unlock()
            && result.is_ok()
        {
            return Err(storage_io_error(err));
        }
        result
    }

    /// Acquires an in-process mutex guard and an exclusive (write) file
    /// lock, executes `op`, then releases the file lock.
    fn with_exclusive_lock<R, F: FnOnce() -> Result<R>>(&self, op: F) -> Result<R> {
        let _guard: MutexGuard<'_, ()> = self.lock.lock().map_err(|err| lock_poison_error(&err))?;
        self.lock_file.lock().map_err(storage_io_error)?;
        let result = op();
        if let Err(err) = self.lock_file.unlock()
            && result.is_ok()
        {
            return Err(storage_io_error(err));
        }
        result
    }

    /// Reads and deserializes the state document. Returns `None` if the
    /// file does not exist.
    fn read_state(&self) -> Result<Option<AppState>> {
        let path = self.path(STATE_FILE);
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(TallybookError::from),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_io_error(err)),
        }
    }

    /// Atomically writes the state document (write-to-tmp then rename).
    fn write_state(&self, state: &AppState) -> Result<()> {
        let path = self.path(STATE_FILE);
        let tmp_path = self.path(&format!("{STATE_FILE}.tmp"));
        let json = serde_json::to_string_pretty(state).map_err(TallybookError::from)?;
        fs::write(&tmp_path, json).map_err(storage_io_error)?;
        fs::rename(&tmp_path, &path).map_err(storage_io_error)?;
        Ok(())
    }

    /// Deletes the state document.
    ///
    /// The `storage.lock` sentinel is intentionally preserved — it is
    /// infrastructure, not data.
    fn clear_state(&self) -> Result<()> {
        let path = self.path(STATE_FILE);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_io_error(err)),
        }
    }
}

// ── Free-standing helpers ───────────────────────────────────────────────

/// Wraps an I/O error into a [`TallybookError::Storage`].
fn storage_io_error(err: std::io::Error) -> TallybookError {
    TallybookError::Storage(Box::new(err))
}

/// Wraps a mutex poison error into a [`TallybookError::Storage`].
fn lock_poison_error<T>(err: &std::sync::PoisonError<T>) -> TallybookError {
    TallybookError::Storage(err.to_string().into())
}

// ── Storage implementation ──────────────────────────────────────────────

impl super::Storage for FileStorage {
    #[inline]
    fn load(&self) -> Result<Option<AppState>> {
        self.with_shared_lock(|| self.read_state())
    }

    #[inline]
    fn save(&self, state: &AppState) -> Result<()> {
        self.with_exclusive_lock(|| self.write_state(state))
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.with_exclusive_lock(|| self.clear_state())
    }
}
