use w2e_cache::CacheError;
use w2e_core::ConfigError;
use w2e_data::DataError;
use w2e_security::SecurityError;

/// Top-level error for application startup and wiring.
///
/// Wraps the per-layer errors without reinterpreting them: configuration
/// errors fail startup, connection errors surface from the operation that
/// triggered them, credential errors surface from token operations. No
/// retries at this layer.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Data(DataError),
    Cache(CacheError),
    Security(SecurityError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(err) => err.fmt(f),
            AppError::Data(err) => err.fmt(f),
            AppError::Cache(err) => err.fmt(f),
            AppError::Security(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Data(err) => Some(err),
            AppError::Cache(err) => Some(err),
            AppError::Security(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        AppError::Data(err)
    }
}

impl From<CacheError> for AppError {
    fn from(err: CacheError) -> Self {
        AppError::Cache(err)
    }
}

impl From<SecurityError> for AppError {
    fn from(err: SecurityError) -> Self {
        AppError::Security(err)
    }
}
