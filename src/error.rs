//! Error types.
//!
//! Only contract violations surface as errors. Missing business data
//! (unknown order, no operations, no usable window) is not an error: the
//! resolver logs it and returns an empty result.

use std::num::ParseIntError;

use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Result type for resolution.
pub type GanttResult<T> = Result<T, GanttError>;

/// Error reported by an [`OrderRepository`](crate::repository::OrderRepository).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::InternalError(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::InternalError(s.to_string())
    }
}

/// Fatal resolution error.
#[derive(Debug, Error)]
pub enum GanttError {
    /// The order identifier is not a decimal integer.
    #[error("Invalid order id '{value}': {source}")]
    InvalidOrderId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The request context is not valid JSON or has the wrong shape.
    #[error("Malformed request context: {0}")]
    MalformedContext(#[from] serde_json::Error),

    /// The request context has no `orderId` entry.
    #[error("Request context has no orderId")]
    MissingOrderId,

    /// The data source failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_order_id_message() {
        let source = "x1".parse::<i64>().unwrap_err();
        let err = GanttError::InvalidOrderId {
            value: "x1".into(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid order id 'x1'"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_repository_error_conversions() {
        let err: RepositoryError = "boom".into();
        assert!(matches!(err, RepositoryError::InternalError(ref m) if m == "boom"));

        let wrapped: GanttError = RepositoryError::QueryError("bad sql".into()).into();
        assert_eq!(wrapped.to_string(), "Query error: bad sql");
    }
}
