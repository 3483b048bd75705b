//! Error types for the tallybook library.

/// All errors that can occur when using tallybook.
#[derive(Debug, thiserror::Error)]
pub enum TallybookError {
    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage backend failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn core::error::Error + Send + Sync>),

    /// Imported data could not be parsed as transactions.
    #[error("import error: {0}")]
    ImportParse(serde_json::Error),

    /// Imported data was valid JSON but not an array of transactions.
    #[error("import data must be a JSON array of transactions")]
    ImportNotArray,
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, TallybookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_from_serde_json() {
        let serde_err = serde_json::from_str::<String>("not json").unwrap_err();
        let err = TallybookError::from(serde_err);
        assert!(matches!(err, TallybookError::Serialization(_)));
        let msg = err.to_string();
        assert!(msg.contains("serialization error"));
    }

    #[test]
    fn error_storage_display() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = TallybookError::Storage(Box::new(inner));
        let msg = err.to_string();
        assert!(msg.contains("storage error"));
        assert!(msg.contains("file missing"));
    }

    #[test]
    fn error_import_not_array_display() {
        let err = TallybookError::ImportNotArray;
        assert!(err.to_string().contains("JSON array"));
    }

    #[test]
    fn error_import_parse_display() {
        let serde_err = serde_json::from_str::<i32>("{}").unwrap_err();
        let err = TallybookError::ImportParse(serde_err);
        assert!(err.to_string().contains("import error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TallybookError>();
    }
}
