//! # w2e-data — database layer for the what2eat backend
//!
//! Connection construction, scoped sessions, schema provisioning, and the
//! entity base the future domain modules build on.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Db`] | Process-wide connection pool, PostgreSQL or SQLite, selected at runtime from [`Settings`](w2e_core::Settings) |
//! | [`Session`] | Transaction-scoped unit-of-work handle — commit explicitly, rollback on drop |
//! | [`SchemaRegistry`] | Known entity definitions + idempotent `create_all` provisioning |
//! | [`Entity`] | Trait for persisted entity types |
//! | [`Timestamps`] / [`TimestampStrategy`] | Creation/update timestamp pair and who computes it |
//! | [`naming`] | Deterministic constraint/index naming convention |
//!
//! # Sessions
//!
//! A [`Session`] wraps one transaction from the pool. It is released back on
//! every exit path: committing consumes it, and dropping an uncommitted
//! session (caller error, cancellation at an await point) rolls back. Writes
//! only become visible to other sessions at commit. Sessions must not be
//! shared across concurrent units of work; acquire one per unit of work.
//!
//! ```ignore
//! let db = Db::connect(&settings).await?;
//! let n = db
//!     .with_session(|session| {
//!         Box::pin(async move {
//!             session.execute("DELETE FROM dishes WHERE name = 'gruel'").await
//!         })
//!     })
//!     .await?;
//! ```
//!
//! # Provisioning
//!
//! [`SchemaRegistry::create_all`] issues `CREATE TABLE IF NOT EXISTS` for
//! every registered definition. It exists for development and tests only; a
//! real migration tool is the production path for schema evolution.

pub mod engine;
pub mod entity;
pub mod error;
pub mod naming;
pub mod schema;
pub mod session;
pub mod timestamps;

pub use engine::Db;
pub use entity::Entity;
pub use error::{DataError, DataResult};
pub use schema::{ColumnDef, SchemaRegistry, SqlType, TableDef};
pub use session::Session;
pub use timestamps::{TimestampStrategy, Timestamps};

/// Re-exports of the most commonly used types in this crate.
pub mod prelude {
    pub use crate::engine::Db;
    pub use crate::entity::Entity;
    pub use crate::error::{DataError, DataResult};
    pub use crate::schema::{ColumnDef, SchemaRegistry, SqlType, TableDef};
    pub use crate::session::Session;
    pub use crate::timestamps::{TimestampStrategy, Timestamps};
}
