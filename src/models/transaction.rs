//! Transaction model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, TransactionId, TransactionKind};

/// A single income or expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier (opaque string).
    pub id: TransactionId,
    /// Free-text description.
    pub description: String,
    /// Amount (>= 0); the sign is carried by `kind`.
    pub amount: f64,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Spending category.
    pub category: Category,
    /// When the transaction occurred.
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_expense() {
        let json = r#"{
            "id": "tx-001",
            "description": "Morning coffee",
            "amount": 4.5,
            "type": "expense",
            "category": "food",
            "date": "2024-01-15T09:30:00Z"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, TransactionId::new("tx-001".to_owned()));
        assert_eq!(tx.description, "Morning coffee");
        assert!((tx.amount - 4.5).abs() < f64::EPSILON);
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.category, Category::Food);
    }

    #[test]
    fn kind_serializes_as_type_key() {
        let tx = Transaction {
            id: TransactionId::new("t-1".to_owned()),
            description: "Paycheck".to_owned(),
            amount: 2500.0,
            kind: TransactionKind::Income,
            category: Category::Salary,
            date: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };
        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains(r#""type":"income""#));
        assert!(!json.contains(r#""kind""#));
    }

    #[test]
    fn serialize_roundtrip() {
        let tx = Transaction {
            id: TransactionId::new("t-1".to_owned()),
            description: "Bus ticket".to_owned(),
            amount: 2.75,
            kind: TransactionKind::Expense,
            category: Category::Transport,
            date: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };
        let json = serde_json::to_string(&tx).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, tx);
    }

    #[test]
    fn missing_field_fails() {
        let json = r#"{"id": "t-1", "description": "x"}"#;
        let result = serde_json::from_str::<Transaction>(json);
        assert!(result.is_err());
    }
}
