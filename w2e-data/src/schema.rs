//! Table definitions, DDL generation, and schema provisioning.

use w2e_core::{DbType, Settings};

use crate::engine::Db;
use crate::entity::Entity;
use crate::error::DataResult;
use crate::naming;
use crate::timestamps::TimestampStrategy;

/// SQL column types this layer knows how to render for both engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    BigInt,
    Integer,
    VarChar(u16),
    Text,
    Boolean,
    Double,
    TimestampTz,
}

impl SqlType {
    fn render(&self, backend: DbType, auto_increment: bool) -> String {
        match (self, backend) {
            (SqlType::BigInt, DbType::Postgres) if auto_increment => "BIGSERIAL".into(),
            (SqlType::BigInt, DbType::Postgres) => "BIGINT".into(),
            // SQLite only auto-assigns on a column declared INTEGER.
            (SqlType::BigInt, DbType::Sqlite) if auto_increment => "INTEGER".into(),
            (SqlType::BigInt, DbType::Sqlite) => "BIGINT".into(),
            (SqlType::Integer, DbType::Postgres) if auto_increment => "SERIAL".into(),
            (SqlType::Integer, _) => "INTEGER".into(),
            (SqlType::VarChar(n), _) => format!("VARCHAR({n})"),
            (SqlType::Text, _) => "TEXT".into(),
            (SqlType::Boolean, _) => "BOOLEAN".into(),
            (SqlType::Double, DbType::Postgres) => "DOUBLE PRECISION".into(),
            (SqlType::Double, DbType::Sqlite) => "REAL".into(),
            (SqlType::TimestampTz, DbType::Postgres) => "TIMESTAMPTZ".into(),
            (SqlType::TimestampTz, DbType::Sqlite) => "DATETIME".into(),
        }
    }
}

/// One column of a [`TableDef`]. Columns are `NOT NULL` unless
/// [`nullable`](ColumnDef::nullable) is called.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    name: &'static str,
    ty: SqlType,
    nullable: bool,
    primary_key: bool,
    auto_increment: bool,
    unique: bool,
    indexed: bool,
    references: Option<(&'static str, &'static str)>,
    default_sql: Option<String>,
}

impl ColumnDef {
    pub fn new(name: &'static str, ty: SqlType) -> Self {
        ColumnDef {
            name,
            ty,
            nullable: false,
            primary_key: false,
            auto_increment: false,
            unique: false,
            indexed: false,
            references: None,
            default_sql: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// Foreign key to `table(column)`.
    pub fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.references = Some((table, column));
        self
    }

    /// Raw SQL default expression.
    pub fn default_sql(mut self, expr: impl Into<String>) -> Self {
        self.default_sql = Some(expr.into());
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// A table definition fed to schema provisioning.
#[derive(Debug, Clone)]
pub struct TableDef {
    name: &'static str,
    columns: Vec<ColumnDef>,
    timestamps: bool,
}

impl TableDef {
    pub fn new(name: &'static str) -> Self {
        TableDef {
            name,
            columns: Vec::new(),
            timestamps: false,
        }
    }

    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Mark the table as carrying the `created_at`/`updated_at` pair.
    ///
    /// The columns themselves are materialized at DDL-generation time, when
    /// the registry's [`TimestampStrategy`] is known — not here.
    pub fn with_timestamps(mut self) -> Self {
        self.timestamps = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Render the `CREATE TABLE IF NOT EXISTS` statement and any
    /// `CREATE INDEX IF NOT EXISTS` statements for this table.
    ///
    /// Constraint and index names follow [`naming`] on both engines.
    pub fn create_statements(
        &self,
        backend: DbType,
        strategy: TimestampStrategy,
    ) -> Vec<String> {
        let mut columns = self.columns.clone();
        if self.timestamps {
            let mut created = ColumnDef::new("created_at", SqlType::TimestampTz).indexed();
            let mut updated = ColumnDef::new("updated_at", SqlType::TimestampTz);
            if let Some(default) = strategy.column_default() {
                created = created.default_sql(default);
                updated = updated.default_sql(default);
            }
            columns.push(created);
            columns.push(updated);
        }

        let mut lines: Vec<String> = columns
            .iter()
            .map(|col| {
                let mut line = format!("{} {}", col.name, col.ty.render(backend, col.auto_increment));
                if !col.nullable {
                    line.push_str(" NOT NULL");
                }
                if let Some(default) = &col.default_sql {
                    line.push_str(" DEFAULT ");
                    line.push_str(default);
                }
                line
            })
            .collect();

        let pk_columns: Vec<&str> = columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name)
            .collect();
        if !pk_columns.is_empty() {
            lines.push(format!(
                "CONSTRAINT {} PRIMARY KEY ({})",
                naming::primary_key(self.name),
                pk_columns.join(", ")
            ));
        }
        for col in columns.iter().filter(|c| c.unique) {
            lines.push(format!(
                "CONSTRAINT {} UNIQUE ({})",
                naming::unique_key(self.name, col.name),
                col.name
            ));
        }
        for col in &columns {
            if let Some((table, column)) = col.references {
                lines.push(format!(
                    "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
                    naming::foreign_key(self.name, col.name),
                    col.name,
                    table,
                    column
                ));
            }
        }

        let mut statements = vec![format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.name,
            lines.join(",\n    ")
        )];
        for col in columns.iter().filter(|c| c.indexed) {
            statements.push(format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
                naming::index(self.name, col.name),
                self.name,
                col.name
            ));
        }
        statements
    }
}

/// The full set of known entity definitions, plus the timestamp strategy
/// selected from the resolved configuration.
pub struct SchemaRegistry {
    strategy: TimestampStrategy,
    tables: Vec<TableDef>,
}

impl SchemaRegistry {
    pub fn new(strategy: TimestampStrategy) -> Self {
        SchemaRegistry {
            strategy,
            tables: Vec::new(),
        }
    }

    /// Registry for the engine selected in `settings`. This is where the
    /// timestamp population strategy is decided — from the configuration
    /// value, not at type-definition time.
    pub fn for_settings(settings: &Settings) -> Self {
        Self::new(TimestampStrategy::for_backend(settings.db_type))
    }

    pub fn register(mut self, def: TableDef) -> Self {
        self.tables.push(def);
        self
    }

    pub fn register_entity<E: Entity>(self) -> Self {
        self.register(E::table_def())
    }

    pub fn strategy(&self) -> TimestampStrategy {
        self.strategy
    }

    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    /// Create every registered table. Idempotent: every statement is
    /// `IF NOT EXISTS`, so calling this twice neither errors nor changes the
    /// schema the second time.
    ///
    /// Development and test convenience only — production schema evolution
    /// belongs to a real migration tool (`sqlx::migrate!`), not to this.
    pub async fn create_all(&self, db: &Db) -> DataResult<()> {
        let mut session = db.begin().await?;
        for table in &self.tables {
            for statement in table.create_statements(db.backend(), self.strategy) {
                session.execute(&statement).await?;
            }
        }
        session.commit().await?;
        tracing::info!(tables = self.tables.len(), "database tables created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dishes() -> TableDef {
        TableDef::new("dishes")
            .column(ColumnDef::new("id", SqlType::BigInt).primary_key().auto_increment())
            .column(ColumnDef::new("name", SqlType::VarChar(255)).unique())
            .column(ColumnDef::new("description", SqlType::Text).nullable())
            .with_timestamps()
    }

    #[test]
    fn postgres_ddl_uses_named_constraints_and_server_defaults() {
        let statements = dishes().create_statements(DbType::Postgres, TimestampStrategy::ServerManaged);

        let table = &statements[0];
        assert!(table.starts_with("CREATE TABLE IF NOT EXISTS dishes"));
        assert!(table.contains("id BIGSERIAL NOT NULL"));
        assert!(table.contains("name VARCHAR(255) NOT NULL"));
        assert!(table.contains("description TEXT,"));
        assert!(table.contains("created_at TIMESTAMPTZ NOT NULL DEFAULT now()"));
        assert!(table.contains("updated_at TIMESTAMPTZ NOT NULL DEFAULT now()"));
        assert!(table.contains("CONSTRAINT dishes_pkey PRIMARY KEY (id)"));
        assert!(table.contains("CONSTRAINT dishes_name_key UNIQUE (name)"));

        assert_eq!(
            statements[1],
            "CREATE INDEX IF NOT EXISTS dishes_created_at_idx ON dishes (created_at)"
        );
    }

    #[test]
    fn sqlite_ddl_leaves_timestamps_to_the_application() {
        let statements = dishes().create_statements(DbType::Sqlite, TimestampStrategy::AppManaged);

        let table = &statements[0];
        assert!(table.contains("id INTEGER NOT NULL"));
        assert!(table.contains("created_at DATETIME NOT NULL,"));
        assert!(table.contains("updated_at DATETIME NOT NULL,"));
        assert!(!table.contains("DEFAULT now()"));
    }

    #[test]
    fn foreign_keys_follow_the_naming_convention() {
        let link = TableDef::new("collection_dish")
            .column(
                ColumnDef::new("collection_id", SqlType::BigInt)
                    .primary_key()
                    .references("collections", "id"),
            )
            .column(
                ColumnDef::new("dish_id", SqlType::BigInt)
                    .primary_key()
                    .references("dishes", "id"),
            );
        let statements = link.create_statements(DbType::Postgres, TimestampStrategy::ServerManaged);

        let table = &statements[0];
        assert!(table.contains("CONSTRAINT collection_dish_pkey PRIMARY KEY (collection_id, dish_id)"));
        assert!(table.contains(
            "CONSTRAINT collection_dish_collection_id_fkey FOREIGN KEY (collection_id) REFERENCES collections (id)"
        ));
        assert!(table.contains(
            "CONSTRAINT collection_dish_dish_id_fkey FOREIGN KEY (dish_id) REFERENCES dishes (id)"
        ));
    }

    #[test]
    fn tables_without_timestamp_marker_get_no_timestamp_columns() {
        let plain = TableDef::new("tags").column(ColumnDef::new("id", SqlType::BigInt).primary_key());
        let statements = plain.create_statements(DbType::Sqlite, TimestampStrategy::AppManaged);
        assert!(!statements[0].contains("created_at"));
        assert_eq!(statements.len(), 1);
    }
}
