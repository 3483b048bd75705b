//! The application state snapshot.

use serde::{Deserialize, Serialize};

use super::{FilterState, HistoryEntry, Theme, Transaction};

/// The complete application state.
///
/// Snapshots are immutable: the reducer always builds a fresh value and
/// the store swaps the whole snapshot. This struct is also the persisted
/// JSON layout, so field names are stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    /// All transactions, newest first.
    pub transactions: Vec<Transaction>,
    /// Undo stack, most recent first, capped at
    /// [`HISTORY_LIMIT`](super::HISTORY_LIMIT).
    pub history: Vec<HistoryEntry>,
    /// Active UI theme.
    pub theme: Theme,
    /// Display currency code (e.g. `"USD"`).
    pub currency: String,
    /// Active transaction filters.
    pub filters: FilterState,
    /// Whether dispatches auto-persist the state.
    pub persist: bool,
}

impl Default for AppState {
    #[inline]
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            history: Vec::new(),
            theme: Theme::default(),
            currency: "USD".to_owned(),
            filters: FilterState::default(),
            persist: true,
        }
    }
}
