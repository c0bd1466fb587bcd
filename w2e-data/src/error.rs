/// Errors that can occur in the data layer.
#[derive(Debug)]
pub enum DataError {
    /// Row lookup produced nothing.
    NotFound(String),
    /// Driver-level failure: connecting, acquiring from the pool (including
    /// acquisition timeout), executing, or committing.
    Database(sqlx::Error),
    /// Anything else (filesystem preparation for the embedded engine, ...).
    Other(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NotFound(msg) => write!(f, "Not found: {msg}"),
            DataError::Database(err) => write!(f, "Database error: {err}"),
            DataError::Other(msg) => write!(f, "Data error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Database(err) => Some(err),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DataError::NotFound("Row not found".into()),
            other => DataError::Database(other),
        }
    }
}

/// Convenience alias for data-layer results.
pub type DataResult<T> = Result<T, DataError>;
