use crate::schema::TableDef;

/// Trait representing a persisted entity with a table name, id column, and
/// column list.
///
/// [`table_def`](Entity::table_def) describes the table for schema
/// provisioning; register it with a
/// [`SchemaRegistry`](crate::SchemaRegistry).
///
/// # Example
///
/// ```ignore
/// impl Entity for Dish {
///     type Id = i64;
///     fn table_name() -> &'static str { "dishes" }
///     fn id_column() -> &'static str { "id" }
///     fn columns() -> &'static [&'static str] {
///         &["id", "name", "description", "created_at", "updated_at"]
///     }
///     fn id(&self) -> &i64 { &self.id }
///     fn table_def() -> TableDef {
///         TableDef::new("dishes")
///             .column(ColumnDef::new("id", SqlType::BigInt).primary_key().auto_increment())
///             .column(ColumnDef::new("name", SqlType::VarChar(255)).unique())
///             .column(ColumnDef::new("description", SqlType::Text).nullable())
///             .with_timestamps()
///     }
/// }
/// ```
pub trait Entity: Send + Sync + Unpin + 'static {
    type Id: Send + Sync + ToString + 'static;

    fn table_name() -> &'static str;
    fn id_column() -> &'static str;
    fn columns() -> &'static [&'static str];
    fn id(&self) -> &Self::Id;

    /// The table definition fed to schema provisioning.
    fn table_def() -> TableDef;
}
