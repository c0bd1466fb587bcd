//! Creation/update timestamps and the strategy deciding who computes them.

use chrono::{DateTime, Utc};
use w2e_core::DbType;

/// The timestamp field pair carried by persisted entities.
///
/// `created_at` is set once when a row is first persisted; `updated_at` is
/// refreshed on every write. Fields are `None` until stamped — under the
/// server-managed strategy they stay `None` in the application and the
/// engine fills the columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamps {
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Who computes `created_at`/`updated_at`.
///
/// Selected explicitly from the resolved configuration at
/// registration/provisioning time — see
/// [`SchemaRegistry::for_settings`](crate::SchemaRegistry::for_settings).
/// Nothing is decided at type-definition time, so the selection always
/// reflects the configuration the process actually started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStrategy {
    /// The database engine computes both values: `DEFAULT now()` column
    /// defaults on insert, and a `now()` assignment emitted into update
    /// statements.
    ServerManaged,
    /// The application stamps current UTC time on insert and update. Used
    /// for the embedded engine, which has no server-side trigger mechanism
    /// wired up.
    AppManaged,
}

impl TimestampStrategy {
    /// The strategy for a database engine: PostgreSQL is server-managed,
    /// SQLite is application-managed.
    pub fn for_backend(db_type: DbType) -> Self {
        match db_type {
            DbType::Postgres => TimestampStrategy::ServerManaged,
            DbType::Sqlite => TimestampStrategy::AppManaged,
        }
    }

    /// Stamp a row about to be inserted.
    pub fn stamp_insert(&self, ts: &mut Timestamps) {
        if let TimestampStrategy::AppManaged = self {
            let now = Utc::now();
            ts.created_at = Some(now);
            ts.updated_at = Some(now);
        }
    }

    /// Stamp a row about to be updated. `created_at` is never touched.
    pub fn stamp_update(&self, ts: &mut Timestamps) {
        if let TimestampStrategy::AppManaged = self {
            ts.updated_at = Some(Utc::now());
        }
    }

    /// SQL default expression for both timestamp columns, if the engine
    /// computes them.
    pub fn column_default(&self) -> Option<&'static str> {
        match self {
            TimestampStrategy::ServerManaged => Some("now()"),
            TimestampStrategy::AppManaged => None,
        }
    }

    /// `SET`-clause fragment refreshing `updated_at`, if the engine computes
    /// it. Application-managed callers bind the stamped value instead.
    pub fn update_assignment(&self, column: &str) -> Option<String> {
        match self {
            TimestampStrategy::ServerManaged => Some(format!("{column} = now()")),
            TimestampStrategy::AppManaged => None,
        }
    }
}
