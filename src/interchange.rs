//! Import and export of transaction lists as JSON.
//!
//! Exports cover the transaction list only — never filters, history, or
//! preferences. Imports are validated up front so a bad document changes
//! nothing.

use chrono::NaiveDate;

use crate::error::{Result, TallybookError};
use crate::models::Transaction;

/// Serializes transactions as a pretty-printed (2-space) JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[inline]
pub fn export_json(transactions: &[Transaction]) -> Result<String> {
    serde_json::to_string_pretty(transactions).map_err(TallybookError::from)
}

/// Suggested file name for an export taken on the given date.
#[inline]
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("transactions-{}.json", date.format("%Y-%m-%d"))
}

/// Parses a JSON array of transactions.
///
/// The whole document is validated before anything is returned, so a
/// caller dispatching the records one by one never applies a partial
/// import.
///
/// # Errors
///
/// Returns [`TallybookError::ImportParse`] when the input is not valid
/// JSON or an element is not a valid transaction, and
/// [`TallybookError::ImportNotArray`] when the document is valid JSON
/// but not an array.
#[inline]
pub fn import_json(input: &str) -> Result<Vec<Transaction>> {
    let document: serde_json::Value =
        serde_json::from_str(input).map_err(TallybookError::ImportParse)?;
    if !document.is_array() {
        return Err(TallybookError::ImportNotArray);
    }
    serde_json::from_value(document).map_err(TallybookError::ImportParse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionId, TransactionKind};
    use chrono::DateTime;

    fn test_transaction(id: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(id.to_owned()),
            description: "Coffee".to_owned(),
            amount: 4.5,
            kind: TransactionKind::Expense,
            category: Category::Food,
            date: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn export_is_two_space_indented_array() {
        let json = export_json(&[test_transaction("t-1")]).unwrap();
        assert!(json.starts_with("[\n  {"));
        assert!(json.contains("\n    \"id\": \"t-1\""));
    }

    #[test]
    fn export_empty_list() {
        let json = export_json(&[]).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn export_file_name_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_file_name(date), "transactions-2024-03-07.json");
    }

    #[test]
    fn import_roundtrips_export() {
        let original = vec![test_transaction("t-1"), test_transaction("t-2")];
        let json = export_json(&original).unwrap();
        let imported = import_json(&json).unwrap();
        assert_eq!(imported, original);
    }

    #[test]
    fn import_invalid_json_is_parse_error() {
        let result = import_json("{not json");
        assert!(matches!(result, Err(TallybookError::ImportParse(_))));
    }

    #[test]
    fn import_non_array_is_rejected() {
        let result = import_json(r#"{"id": "t-1"}"#);
        assert!(matches!(result, Err(TallybookError::ImportNotArray)));
    }

    #[test]
    fn import_bad_element_is_parse_error() {
        let result = import_json(r#"[{"id": "t-1"}]"#);
        assert!(matches!(result, Err(TallybookError::ImportParse(_))));
    }

    #[test]
    fn import_empty_array_is_ok() {
        let imported = import_json("[]").unwrap();
        assert!(imported.is_empty());
    }
}
