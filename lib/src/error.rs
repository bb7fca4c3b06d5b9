use std::path::PathBuf;

/// Error type for the meteor library
///
/// Every variant is terminal for the profile being processed. Whether the
/// caller stops the whole run or moves on to the next profile is decided
/// outside the library.
#[derive(Debug, thiserror::Error)]
pub enum MeteorError {
    /// Bookmark file or database missing, unreadable or unopenable
    #[error("Cannot read {}: {reason}", path.display())]
    DataSourceUnavailable { path: PathBuf, reason: String },

    /// JSON structurally invalid or missing required fields
    #[error("Malformed bookmark data: {0}")]
    MalformedInput(String),

    /// SQL execution or row decoding failed
    #[error("Query failed: {0}")]
    QueryFailure(#[from] rusqlite::Error),

    /// Output encoding fault
    #[error("Serialization error: {0}")]
    SerializationError(#[source] serde_json::Error),

    /// Folder nesting deeper than the configured guard
    #[error("Bookmark folders nested deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },

    /// I/O errors while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Some profiles failed while the run kept going
    #[error("{failed} of {total} profiles failed")]
    ProfilesFailed { failed: usize, total: usize },
}

/// Result type alias using MeteorError
pub type Result<T> = std::result::Result<T, MeteorError>;

impl MeteorError {
    pub fn unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        MeteorError::DataSourceUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MeteorError {
    fn from(err: serde_yaml::Error) -> Self {
        MeteorError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message_names_path() {
        let err = MeteorError::unavailable("/nope/Bookmarks", "No such file or directory");
        let msg = err.to_string();
        assert!(msg.contains("/nope/Bookmarks"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_depth_limit_message() {
        let err = MeteorError::DepthLimitExceeded { limit: 8 };
        assert_eq!(err.to_string(), "Bookmark folders nested deeper than 8 levels");
    }

    #[test]
    fn test_yaml_error_becomes_config() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("{not: a list}").unwrap_err();
        assert!(matches!(MeteorError::from(yaml_err), MeteorError::Config(_)));
    }
}
