//! Pure functions for compiling schema values to SQL DDL strings.
//!
//! No I/O. No side effects. The output layout (two-space indent, `,\n`
//! between columns, a blank line between tables) is stable and relied on by
//! callers that diff generated SQL.

use dbml_forge_core::{Column, Schema, Table};

/// Compile a whole schema into `CREATE TABLE` statements.
///
/// Statements appear in schema order, separated by a blank line. An empty
/// schema produces an empty string.
pub fn generate(schema: &Schema) -> String {
    schema
        .tables
        .iter()
        .map(generate_table)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Compile a single table into one `CREATE TABLE` statement.
pub fn generate_table(table: &Table) -> String {
    let columns: Vec<String> = table.columns.iter().map(generate_column).collect();
    format!(
        "CREATE TABLE {} (\n  {}\n);",
        table.name,
        columns.join(",\n  ")
    )
}

/// Compile a column into its definition line, without indentation or
/// trailing comma.
///
/// Modifiers are emitted in a fixed order: `NOT NULL`, `PRIMARY KEY`,
/// `UNIQUE`, `DEFAULT <value>`, then any raw constraint text.
pub fn generate_column(column: &Column) -> String {
    let mut line = format!("{} {}", column.name, column.column_type);
    if column.not_null {
        line.push_str(" NOT NULL");
    }
    if column.primary_key {
        line.push_str(" PRIMARY KEY");
    }
    if column.unique {
        line.push_str(" UNIQUE");
    }
    if let Some(default) = &column.default {
        line.push_str(" DEFAULT ");
        line.push_str(default);
    }
    if let Some(raw) = &column.constraints {
        line.push(' ');
        line.push_str(raw);
    }
    line
}
