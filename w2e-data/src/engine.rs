//! Engine construction: one pool per process, built from [`Settings`].

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, Pool, Postgres, Sqlite, SqlitePool};
use w2e_core::{DbType, Settings};

use crate::error::{DataError, DataResult};
use crate::session::Session;

pub(crate) enum Pools {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

/// The process-wide database handle: a connection pool plus the verbosity
/// flag for statement tracing.
///
/// Construct one at startup and pass it explicitly to whatever needs it.
/// Connections are opened lazily; network or auth failures surface from the
/// first operation that actually needs a connection, not from
/// [`connect`](Db::connect).
pub struct Db {
    pools: Pools,
    echo: bool,
}

impl Db {
    /// Build the pool for the engine selected in `settings`.
    ///
    /// PostgreSQL maps the configured pool tuning onto sqlx:
    /// `max_connections = pool_size + max_overflow`, `acquire_timeout =
    /// pool_timeout`, `max_lifetime = pool_recycle`, `test_before_acquire =
    /// pool_pre_ping`. SQLite takes no pool tuning; the database file (and
    /// its parent directory) is created if missing.
    pub async fn connect(settings: &Settings) -> DataResult<Self> {
        let options = settings.engine_options();
        let pools = match settings.db_type {
            DbType::Postgres => {
                let connect: PgConnectOptions = settings.database_url().parse()?;
                let mut pool = PgPoolOptions::new();
                if let Some(tuning) = &options.pool {
                    pool = pool
                        .max_connections(tuning.max_connections())
                        .acquire_timeout(tuning.acquire_timeout)
                        .max_lifetime(tuning.max_lifetime)
                        .test_before_acquire(tuning.test_before_acquire);
                }
                Pools::Postgres(pool.connect_lazy_with(connect))
            }
            DbType::Sqlite => {
                prepare_sqlite_path(&settings.sqlite_db_path)?;
                let connect = settings
                    .database_url()
                    .parse::<SqliteConnectOptions>()?
                    .create_if_missing(true);
                Pools::Sqlite(SqlitePoolOptions::new().connect_lazy_with(connect))
            }
        };
        Ok(Db {
            pools,
            echo: options.echo,
        })
    }

    /// The engine this handle talks to.
    pub fn backend(&self) -> DbType {
        match self.pools {
            Pools::Postgres(_) => DbType::Postgres,
            Pools::Sqlite(_) => DbType::Sqlite,
        }
    }

    /// Begin a [`Session`]: one transaction for one unit of work.
    ///
    /// The session rolls back and releases its connection when dropped
    /// without an explicit [`commit`](Session::commit) — on caller errors
    /// and on cancellation alike. Pool acquisition failures (including the
    /// configured acquisition timeout) surface here as
    /// [`DataError::Database`].
    pub async fn begin(&self) -> DataResult<Session<'static>> {
        let session = match &self.pools {
            Pools::Postgres(pool) => Session::postgres(pool.begin().await?, self.echo),
            Pools::Sqlite(pool) => Session::sqlite(pool.begin().await?, self.echo),
        };
        Ok(session)
    }

    /// Run one unit of work in a scoped session: commit on `Ok`, roll back
    /// on `Err`.
    ///
    /// ```ignore
    /// db.with_session(|session| {
    ///     Box::pin(async move {
    ///         session.execute("DELETE FROM dishes WHERE id = 1").await?;
    ///         Ok(())
    ///     })
    /// })
    /// .await?;
    /// ```
    pub async fn with_session<T, F>(&self, f: F) -> DataResult<T>
    where
        F: for<'s> FnOnce(
            &'s mut Session<'static>,
        ) -> Pin<Box<dyn Future<Output = DataResult<T>> + Send + 's>>,
    {
        let mut session = self.begin().await?;
        match f(&mut session).await {
            Ok(value) => {
                session.commit().await?;
                Ok(value)
            }
            Err(err) => {
                session.rollback().await?;
                Err(err)
            }
        }
    }

    /// Direct access to the PostgreSQL pool, when the backend is PostgreSQL.
    pub fn postgres_pool(&self) -> Option<&Pool<Postgres>> {
        match &self.pools {
            Pools::Postgres(pool) => Some(pool),
            Pools::Sqlite(_) => None,
        }
    }

    /// Direct access to the SQLite pool, when the backend is SQLite.
    pub fn sqlite_pool(&self) -> Option<&Pool<Sqlite>> {
        match &self.pools {
            Pools::Sqlite(pool) => Some(pool),
            Pools::Postgres(_) => None,
        }
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        match &self.pools {
            Pools::Postgres(pool) => pool.close().await,
            Pools::Sqlite(pool) => pool.close().await,
        }
    }
}

/// Make sure the directory holding the database file exists.
fn prepare_sqlite_path(path: &str) -> DataResult<()> {
    if path.contains(":memory:") {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DataError::Other(format!("create {}: {e}", parent.display())))?;
        }
    }
    Ok(())
}
