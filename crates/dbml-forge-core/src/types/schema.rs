use serde::{Deserialize, Serialize};

use super::table::Table;

/// An ordered collection of tables.
///
/// Table names are not required to be unique; tables sharing a name are all
/// retained in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a table and returns its index.
    pub fn push_table(&mut self, table: Table) -> usize {
        self.tables.push(table);
        self.tables.len() - 1
    }

    /// Returns the first table with the given name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Total number of columns across all tables.
    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }
}

impl From<Vec<Table>> for Schema {
    fn from(tables: Vec<Table>) -> Self {
        Self { tables }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Column;

    #[test]
    fn push_table_returns_index() {
        let mut schema = Schema::new();
        assert_eq!(schema.push_table(Table::new("a")), 0);
        assert_eq!(schema.push_table(Table::new("b")), 1);
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn duplicate_names_are_retained() {
        let schema = Schema::from(vec![
            Table::with_columns("users", vec![Column::new("id", "int")]),
            Table::new("users"),
        ]);
        assert_eq!(schema.len(), 2);
        // lookup resolves to the first
        assert_eq!(schema.table("users").map(|t| t.columns.len()), Some(1));
    }

    #[test]
    fn column_count_sums_tables() {
        let schema = Schema::from(vec![
            Table::with_columns("a", vec![Column::new("x", "int"), Column::new("y", "int")]),
            Table::with_columns("b", vec![Column::new("z", "int")]),
        ]);
        assert_eq!(schema.column_count(), 3);
    }

    #[test]
    fn empty_schema() {
        let schema = Schema::default();
        assert!(schema.is_empty());
        assert_eq!(schema.column_count(), 0);
    }
}
