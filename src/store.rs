//! The state container: dispatch, subscriptions, auto-persistence.

use core::cell::RefCell;
use std::rc::Rc;

use crate::action::Action;
use crate::error::Result;
use crate::models::AppState;
use crate::reducer::reduce;
use crate::storage::Storage;

/// A registered state-change callback.
///
/// Listeners are `Fn` (not `FnMut`) so a listener may dispatch again
/// while the notification pass is running.
type Listener = Rc<dyn Fn()>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
///
/// Wraps the listener's slot index. Slots are never reused, so a stale
/// handle can never detach someone else's listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

/// The state container.
///
/// Holds a single immutable [`AppState`] snapshot that changes only via
/// [`Store::dispatch`]: the reducer computes the next snapshot, the store
/// swaps it in, notifies every live subscriber synchronously in
/// subscription order, then auto-persists through the storage backend if
/// the state's `persist` flag is set.
///
/// The store is an explicit instance — construct one and pass it around
/// (or wrap it in `Rc`); there is no global.
///
/// # Re-entrancy
///
/// A listener may dispatch again. The nested dispatch runs to completion
/// (including its own notification pass) before the outer pass resumes
/// with the next listener. The store is single-threaded by design; it is
/// neither `Send` nor `Sync`.
pub struct Store<S> {
    /// Current snapshot. `Rc` so reads are cheap and snapshots outlive
    /// the swap that replaces them.
    state: RefCell<Rc<AppState>>,
    /// Listener slots in subscription order. Unsubscribing blanks the
    /// slot; indices are never reused.
    listeners: RefCell<Vec<Option<Listener>>>,
    /// Persistence backend.
    storage: S,
}

impl<S: Storage> Store<S> {
    /// Opens a store, loading persisted state or falling back to
    /// [`AppState::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read or the persisted
    /// document cannot be decoded.
    #[inline]
    pub fn open(storage: S) -> Result<Self> {
        let state = storage.load()?.unwrap_or_default();
        Ok(Self::with_state(state, storage))
    }

    /// Creates a store with an explicit initial state.
    #[inline]
    #[must_use]
    pub fn with_state(state: AppState, storage: S) -> Self {
        Self {
            state: RefCell::new(Rc::new(state)),
            listeners: RefCell::new(Vec::new()),
            storage,
        }
    }

    /// Returns the current snapshot.
    #[inline]
    #[must_use]
    pub fn state(&self) -> Rc<AppState> {
        Rc::clone(&self.state.borrow())
    }

    /// Applies an action: reduce, swap the snapshot, notify subscribers,
    /// then auto-persist.
    ///
    /// Subscribers run synchronously in subscription order, once per
    /// dispatch — state changes are never coalesced. A storage failure
    /// during auto-persist is logged and swallowed; the in-memory state
    /// change always survives.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub fn dispatch(&self, action: Action) {
        tracing::debug!(?action, "dispatching");
        let next = {
            let current = self.state();
            Rc::new(reduce(&current, action))
        };
        *self.state.borrow_mut() = Rc::clone(&next);

        // Snapshot the live listeners before the pass so nested
        // subscribe/unsubscribe calls cannot invalidate the iteration.
        let live: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .flatten()
            .map(Rc::clone)
            .collect();
        for listener in live {
            listener();
        }

        // Re-read: a nested dispatch may have moved the state on.
        let latest = self.state();
        if latest.persist
            && let Err(err) = self.storage.save(&latest)
        {
            tracing::warn!(error = %err, "failed to persist state; continuing");
        }
    }

    /// Convenience for dispatching [`Action::Undo`].
    #[inline]
    pub fn undo(&self) {
        self.dispatch(Action::Undo);
    }

    /// Registers a listener called after every dispatch.
    #[inline]
    #[must_use]
    pub fn subscribe<F: Fn() + 'static>(&self, listener: F) -> SubscriberId {
        let mut listeners = self.listeners.borrow_mut();
        let id = SubscriberId(listeners.len());
        listeners.push(Some(Rc::new(listener)));
        id
    }

    /// Detaches the listener with the given handle.
    ///
    /// Idempotent: unsubscribing twice, or with a handle that was never
    /// issued, is a no-op.
    #[inline]
    pub fn unsubscribe(&self, id: SubscriberId) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(slot) = listeners.get_mut(id.0) {
            *slot = None;
        }
    }

    /// Returns a reference to the storage backend.
    #[inline]
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for Store<S> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.borrow().len())
            .field("storage", &self.storage)
            .finish()
    }
}
