//! Naming convention for generated schema artifacts.
//!
//! Applied uniformly by the DDL generator so constraint and index names are
//! deterministic and portable across engines, instead of whatever the engine
//! would auto-generate.

/// Primary key constraint name: `{table}_pkey`.
pub fn primary_key(table: &str) -> String {
    format!("{table}_pkey")
}

/// Unique constraint name: `{table}_{column}_key`.
pub fn unique_key(table: &str, column: &str) -> String {
    format!("{table}_{column}_key")
}

/// Index name: `{table}_{column}_idx`.
pub fn index(table: &str, column: &str) -> String {
    format!("{table}_{column}_idx")
}

/// Foreign key constraint name: `{table}_{column}_fkey`.
pub fn foreign_key(table: &str, column: &str) -> String {
    format!("{table}_{column}_fkey")
}

/// Check constraint name: `{table}_{constraint}_check`.
pub fn check(table: &str, constraint: &str) -> String {
    format!("{table}_{constraint}_check")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_deterministic() {
        assert_eq!(primary_key("dishes"), "dishes_pkey");
        assert_eq!(unique_key("dishes", "name"), "dishes_name_key");
        assert_eq!(index("dishes", "created_at"), "dishes_created_at_idx");
        assert_eq!(foreign_key("collection_dish", "dish_id"), "collection_dish_dish_id_fkey");
        assert_eq!(check("dishes", "price_positive"), "dishes_price_positive_check");
    }
}
