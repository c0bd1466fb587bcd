//! Redis connection construction for the what2eat backend.
//!
//! Two logical databases on the same server: one holding authentication data
//! (session ids, token state), one for general caching. Construction only
//! validates the URL — network or auth failures surface from the first
//! command sent over a connection, in line with the layer's "surface
//! immediately, no masking" error policy. Caching *logic* lives elsewhere;
//! this crate only hands out clients.

use redis::Client;
use w2e_core::Settings;

/// Errors building a redis client.
#[derive(Debug)]
pub enum CacheError {
    /// The derived connection URL was rejected by the client.
    InvalidUrl { url: String, source: redis::RedisError },
}

impl std::fmt::Display for CacheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheError::InvalidUrl { url, source } => {
                write!(f, "Invalid redis URL `{url}`: {source}")
            }
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CacheError::InvalidUrl { source, .. } => Some(source),
        }
    }
}

/// Client for the authentication database (`AUTH_REDIS_DB`).
pub fn create_auth_redis(settings: &Settings) -> Result<Client, CacheError> {
    open(settings.auth_redis_url())
}

/// Client for the general caching database (`CACHE_REDIS_DB`).
pub fn create_cache_redis(settings: &Settings) -> Result<Client, CacheError> {
    open(settings.cache_redis_url())
}

fn open(url: String) -> Result<Client, CacheError> {
    tracing::debug!(%url, "building redis client");
    Client::open(url.as_str()).map_err(|source| CacheError::InvalidUrl { url, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::from_vars(vec![
            ("REDIS_HOST", "localhost"),
            ("REDIS_PORT", "6379"),
            ("AUTH_REDIS_DB", "0"),
            ("CACHE_REDIS_DB", "1"),
        ])
        .unwrap()
    }

    #[test]
    fn clients_build_without_connecting() {
        // No redis server is running here; construction must still succeed.
        let auth = create_auth_redis(&settings()).unwrap();
        let cache = create_cache_redis(&settings()).unwrap();

        assert_eq!(auth.get_connection_info().redis.db, 0);
        assert_eq!(cache.get_connection_info().redis.db, 1);
    }

    #[test]
    fn clients_target_the_configured_indices() {
        let mut vars = vec![("AUTH_REDIS_DB", "5"), ("CACHE_REDIS_DB", "9")];
        vars.push(("REDIS_HOST", "localhost"));
        let settings = Settings::from_vars(vars).unwrap();

        let auth = create_auth_redis(&settings).unwrap();
        let cache = create_cache_redis(&settings).unwrap();
        assert_eq!(auth.get_connection_info().redis.db, 5);
        assert_eq!(cache.get_connection_info().redis.db, 9);
    }
}
