//! The pure state transition function.

use crate::action::Action;
use crate::models::{AppState, HISTORY_LIMIT, HistoryEntry, HistoryKind, Transaction,
    TransactionId};

/// Computes the next state from the current state and an action.
///
/// Pure and total: never mutates its input, never fails, and any state
/// field an action does not mention carries over unchanged.
#[inline]
#[must_use]
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::AddTransaction(transaction) => add_transaction(state, transaction),
        Action::DeleteTransaction(id) => delete_transaction(state, &id),
        Action::SetTheme(theme) => AppState {
            theme,
            ..state.clone()
        },
        Action::SetCurrency(currency) => AppState {
            currency,
            ..state.clone()
        },
        Action::SetFilter(update) => AppState {
            filters: state.filters.merged(update),
            ..state.clone()
        },
        Action::Undo => undo(state),
    }
}

/// Prepends the transaction and records an `Add` history entry.
fn add_transaction(state: &AppState, transaction: Transaction) -> AppState {
    let entry = HistoryEntry {
        kind: HistoryKind::Add,
        data: transaction.clone(),
    };
    AppState {
        transactions: prepended(transaction, &state.transactions),
        history: capped(prepended(entry, &state.history)),
        ..state.clone()
    }
}

/// Removes the transaction with the given ID, recording a `Delete`
/// history entry. When no transaction matches, the state is returned
/// unchanged and no history is recorded.
fn delete_transaction(state: &AppState, id: &TransactionId) -> AppState {
    let Some(removed) = state.transactions.iter().find(|tx| tx.id == *id) else {
        return state.clone();
    };
    let entry = HistoryEntry {
        kind: HistoryKind::Delete,
        data: removed.clone(),
    };
    AppState {
        transactions: state
            .transactions
            .iter()
            .filter(|tx| tx.id != *id)
            .cloned()
            .collect(),
        history: capped(prepended(entry, &state.history)),
        ..state.clone()
    }
}

/// Pops the most recent history entry and inverts it. Undoing records no
/// history of its own; an empty stack is an identity.
fn undo(state: &AppState) -> AppState {
    let Some((entry, rest)) = state.history.split_first() else {
        return state.clone();
    };
    let transactions = match entry.kind {
        HistoryKind::Add => state
            .transactions
            .iter()
            .filter(|tx| tx.id != entry.data.id)
            .cloned()
            .collect(),
        HistoryKind::Delete => prepended(entry.data.clone(), &state.transactions),
    };
    AppState {
        transactions,
        history: rest.to_vec(),
        ..state.clone()
    }
}

/// Builds a new vector with `head` in front of `tail`.
fn prepended<T: Clone>(head: T, tail: &[T]) -> Vec<T> {
    let mut items = Vec::with_capacity(tail.len() + 1);
    items.push(head);
    items.extend_from_slice(tail);
    items
}

/// Truncates the undo stack to [`HISTORY_LIMIT`] entries.
fn capped(mut history: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    history.truncate(HISTORY_LIMIT);
    history
}
