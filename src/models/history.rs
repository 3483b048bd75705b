//! Undo history entries.

use serde::{Deserialize, Serialize};

use super::Transaction;

/// Maximum number of entries kept on the undo stack.
pub const HISTORY_LIMIT: usize = 50;

/// Which operation a history entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HistoryKind {
    /// A transaction was added.
    Add,
    /// A transaction was deleted.
    Delete,
}

/// One entry on the undo stack.
///
/// Carries the full transaction so the operation can be inverted without
/// consulting any other state. The stack is most-recent-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The recorded operation.
    #[serde(rename = "type")]
    pub kind: HistoryKind,
    /// The transaction the operation applied to.
    pub data: Transaction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionId, TransactionKind};
    use chrono::DateTime;

    #[test]
    fn history_kind_serde_uppercase() {
        let add = serde_json::to_string(&HistoryKind::Add).unwrap();
        assert_eq!(add, r#""ADD""#);
        let delete = serde_json::to_string(&HistoryKind::Delete).unwrap();
        assert_eq!(delete, r#""DELETE""#);
    }

    #[test]
    fn history_entry_serde_roundtrip() {
        let entry = HistoryEntry {
            kind: HistoryKind::Delete,
            data: Transaction {
                id: TransactionId::new("t-1".to_owned()),
                description: "Lunch".to_owned(),
                amount: 12.0,
                kind: TransactionKind::Expense,
                category: Category::Food,
                date: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            },
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""type":"DELETE""#));
        let deserialized: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, entry);
    }
}
