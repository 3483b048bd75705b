//! Data models for the tracker state.
//!
//! This module contains the state snapshot, transaction and history
//! records, newtype ID wrappers, and enumeration types for constrained
//! values.

mod app_state;
mod enums;
mod filter;
mod history;
mod ids;
mod transaction;

pub use app_state::AppState;
pub use enums::{Category, CategoryFilter, DateRange, Theme, TransactionKind};
pub use filter::{FilterState, FilterUpdate};
pub use history::{HISTORY_LIMIT, HistoryEntry, HistoryKind};
pub use ids::TransactionId;
pub use transaction::Transaction;
