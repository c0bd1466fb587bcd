//! Application resource lifecycle: startup wiring and shutdown.

use redis::Client;
use tracing::info;
use w2e_cache::{create_auth_redis, create_cache_redis};
use w2e_core::Settings;
use w2e_data::{Db, SchemaRegistry};
use w2e_security::{SecurityError, TokenSigner};

use crate::error::AppError;

/// The wired resources for one process: settings, the database pool, and the
/// two redis clients.
///
/// Everything is owned here and passed by reference to whatever needs it —
/// there is no global state, so behavior never depends on module load order.
pub struct AppContext {
    pub settings: Settings,
    pub db: Db,
    pub auth_redis: Client,
    pub cache_redis: Client,
}

impl AppContext {
    /// Start the application resources: connect the pool, provision the
    /// registered schema, and build the redis clients.
    pub async fn start(settings: Settings, schema: &SchemaRegistry) -> Result<Self, AppError> {
        info!(app = %settings.app_name, version = %settings.app_version, "loading application resources");

        let db = Db::connect(&settings).await?;
        schema.create_all(&db).await?;

        let auth_redis = create_auth_redis(&settings)?;
        let cache_redis = create_cache_redis(&settings)?;
        info!("redis clients ready");

        Ok(AppContext {
            settings,
            db,
            auth_redis,
            cache_redis,
        })
    }

    /// Build a token signer from the held settings.
    ///
    /// This is where a missing `JWT_SECRET` finally surfaces.
    pub fn token_signer(&self) -> Result<TokenSigner, SecurityError> {
        TokenSigner::from_settings(&self.settings)
    }

    /// Release the resources: close the pool, drop the clients.
    pub async fn shutdown(self) {
        self.db.close().await;
        info!("application resources released");
    }
}
