use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

/// Supported database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    Postgres,
    #[default]
    Sqlite,
}

impl DbType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DbType::Postgres => "postgres",
            DbType::Sqlite => "sqlite",
        }
    }
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbType {
    type Err = UnknownDbType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" => Ok(DbType::Postgres),
            "sqlite" => Ok(DbType::Sqlite),
            other => Err(UnknownDbType(other.to_string())),
        }
    }
}

/// Error for an unrecognized `DB_TYPE` value.
#[derive(Debug)]
pub struct UnknownDbType(pub String);

impl std::fmt::Display for UnknownDbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unsupported DB_TYPE: {}", self.0)
    }
}

impl std::error::Error for UnknownDbType {}

/// Options handed to the engine constructor.
///
/// `pool` is populated iff the selected engine is PostgreSQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineOptions {
    pub pool: Option<PoolTuning>,
    /// Trace executed SQL statements.
    pub echo: bool,
}

/// Connection-pool tuning, PostgreSQL only.
///
/// Field names follow the settings they derive from; the pool ceiling is
/// `pool_size + max_overflow` because sqlx keeps a single connection limit
/// rather than a persistent/overflow split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolTuning {
    pub pool_size: u32,
    pub max_overflow: u32,
    pub acquire_timeout: Duration,
    pub max_lifetime: Duration,
    pub test_before_acquire: bool,
}

impl PoolTuning {
    /// Upper bound on simultaneously open connections.
    pub fn max_connections(&self) -> u32 {
        self.pool_size + self.max_overflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_type_parses_case_insensitively() {
        assert_eq!("POSTGRES".parse::<DbType>().unwrap(), DbType::Postgres);
        assert_eq!("Sqlite".parse::<DbType>().unwrap(), DbType::Sqlite);
    }

    #[test]
    fn db_type_rejects_unknown_engine() {
        let err = "mysql".parse::<DbType>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported DB_TYPE: mysql");
    }

    #[test]
    fn pool_ceiling_is_size_plus_overflow() {
        let tuning = PoolTuning {
            pool_size: 20,
            max_overflow: 10,
            acquire_timeout: Duration::from_secs(30),
            max_lifetime: Duration::from_secs(3600),
            test_before_acquire: true,
        };
        assert_eq!(tuning.max_connections(), 30);
    }
}
