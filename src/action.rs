//! Actions: the only way state changes.

use crate::models::{FilterUpdate, Theme, Transaction, TransactionId};

/// A state mutation request, interpreted by [`crate::reducer::reduce`].
///
/// The enum is closed, so there is no "unrecognized action" case — the
/// type system rules it out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Prepend a transaction and record it on the undo stack.
    AddTransaction(Transaction),
    /// Remove the transaction with this ID and record the removal on the
    /// undo stack. A miss is a no-op.
    DeleteTransaction(TransactionId),
    /// Switch the UI theme.
    SetTheme(Theme),
    /// Switch the display currency code.
    SetCurrency(String),
    /// Shallow-merge a partial update into the active filters.
    SetFilter(FilterUpdate),
    /// Invert the most recent undo stack entry.
    Undo,
}
