//! Transaction-scoped unit-of-work handle.

use sqlx::{Postgres, Sqlite, Transaction};
use w2e_core::DbType;

use crate::error::DataResult;

enum SessionTx<'c> {
    Postgres(Transaction<'c, Postgres>),
    Sqlite(Transaction<'c, Sqlite>),
}

/// One transaction bound to the pool for the duration of a unit of work.
///
/// Writes buffer inside the transaction and only become visible at
/// [`commit`](Session::commit). Dropping an uncommitted session rolls back
/// and returns the connection to the pool — this is what guarantees release
/// on every exit path, including cancellation at an await point. Values read
/// before a commit remain usable after it; nothing is invalidated or
/// re-fetched.
///
/// A session belongs to exactly one unit of work. It is `Send` so a unit of
/// work can migrate between executor threads, but it must not be shared
/// across concurrent units.
pub struct Session<'c> {
    tx: SessionTx<'c>,
    echo: bool,
}

impl<'c> Session<'c> {
    pub(crate) fn postgres(tx: Transaction<'c, Postgres>, echo: bool) -> Self {
        Session {
            tx: SessionTx::Postgres(tx),
            echo,
        }
    }

    pub(crate) fn sqlite(tx: Transaction<'c, Sqlite>, echo: bool) -> Self {
        Session {
            tx: SessionTx::Sqlite(tx),
            echo,
        }
    }

    /// The engine this session talks to.
    pub fn backend(&self) -> DbType {
        match self.tx {
            SessionTx::Postgres(_) => DbType::Postgres,
            SessionTx::Sqlite(_) => DbType::Sqlite,
        }
    }

    /// Execute a statement, returning the number of affected rows.
    pub async fn execute(&mut self, sql: &str) -> DataResult<u64> {
        self.trace(sql);
        let affected = match &mut self.tx {
            SessionTx::Postgres(tx) => sqlx::query(sql).execute(&mut **tx).await?.rows_affected(),
            SessionTx::Sqlite(tx) => sqlx::query(sql).execute(&mut **tx).await?.rows_affected(),
        };
        Ok(affected)
    }

    /// Fetch the first column of the first row.
    ///
    /// # Errors
    ///
    /// [`DataError::NotFound`](crate::DataError::NotFound) when the query
    /// returns no rows.
    pub async fn fetch_scalar<T>(&mut self, sql: &str) -> DataResult<T>
    where
        T: Send + Unpin,
        T: for<'r> sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
        T: for<'r> sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
    {
        self.trace(sql);
        let value = match &mut self.tx {
            SessionTx::Postgres(tx) => sqlx::query_scalar(sql).fetch_one(&mut **tx).await?,
            SessionTx::Sqlite(tx) => sqlx::query_scalar(sql).fetch_one(&mut **tx).await?,
        };
        Ok(value)
    }

    /// The underlying PostgreSQL transaction, for backend-specific work with
    /// bound parameters.
    pub fn as_postgres(&mut self) -> Option<&mut Transaction<'c, Postgres>> {
        match &mut self.tx {
            SessionTx::Postgres(tx) => Some(tx),
            SessionTx::Sqlite(_) => None,
        }
    }

    /// The underlying SQLite transaction, for backend-specific work with
    /// bound parameters.
    pub fn as_sqlite(&mut self) -> Option<&mut Transaction<'c, Sqlite>> {
        match &mut self.tx {
            SessionTx::Sqlite(tx) => Some(tx),
            SessionTx::Postgres(_) => None,
        }
    }

    /// Commit the unit of work, making its writes visible.
    pub async fn commit(self) -> DataResult<()> {
        match self.tx {
            SessionTx::Postgres(tx) => tx.commit().await?,
            SessionTx::Sqlite(tx) => tx.commit().await?,
        }
        Ok(())
    }

    /// Roll back explicitly. Dropping the session does the same; this form
    /// surfaces rollback errors instead of swallowing them.
    pub async fn rollback(self) -> DataResult<()> {
        match self.tx {
            SessionTx::Postgres(tx) => tx.rollback().await?,
            SessionTx::Sqlite(tx) => tx.rollback().await?,
        }
        Ok(())
    }

    fn trace(&self, sql: &str) {
        if self.echo {
            tracing::debug!(%sql, "executing statement");
        }
    }
}
