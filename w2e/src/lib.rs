//! # w2e — the what2eat backend skeleton
//!
//! This facade crate re-exports the sub-crates through a single dependency
//! and owns the application runtime context. Import everything you need
//! with:
//!
//! ```ignore
//! use w2e::prelude::*;
//! ```
//!
//! | Crate | Contents |
//! |-------|----------|
//! | [`w2e_core`] | Settings resolver, tracing bootstrap |
//! | [`w2e_data`] | Pool, sessions, schema provisioning, entity base |
//! | [`w2e_cache`] | Redis client construction |
//! | [`w2e_security`] | Token signing |

pub use w2e_cache;
pub use w2e_core;
pub use w2e_data;
pub use w2e_security;

pub mod error;
pub mod runtime;

pub use error::AppError;
pub use runtime::AppContext;
pub use w2e_core::init_tracing;

/// Re-exports of the most commonly used types across the workspace.
pub mod prelude {
    pub use crate::error::AppError;
    pub use crate::runtime::AppContext;
    pub use w2e_cache::{create_auth_redis, create_cache_redis, CacheError};
    pub use w2e_core::{init_tracing, ConfigError, DbType, EngineOptions, Settings};
    pub use w2e_data::prelude::*;
    pub use w2e_security::{Claims, SecurityError, TokenSigner};
}
