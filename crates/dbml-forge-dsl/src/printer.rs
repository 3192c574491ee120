use dbml_forge_core::{Column, Schema, Table};

/// Print a schema as DBML text.
///
/// Tables are separated by blank lines and columns are indented by two
/// spaces. Parsing the output yields the same schema.
pub fn print(schema: &Schema) -> String {
    let mut output = String::new();
    for (i, table) in schema.tables.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        print_table(table, &mut output);
    }
    output
}

fn print_table(table: &Table, output: &mut String) {
    output.push_str("Table ");
    output.push_str(&table.name);
    output.push_str(" {\n");

    for column in &table.columns {
        output.push_str("  ");
        print_column(column, output);
        output.push('\n');
    }

    output.push_str("}\n");
}

fn print_column(column: &Column, output: &mut String) {
    output.push_str(&column.name);
    output.push_str(": ");
    output.push_str(&column.column_type);

    let modifiers = build_modifiers(column);
    if !modifiers.is_empty() {
        output.push_str(" [");
        output.push_str(&modifiers.join(", "));
        output.push(']');
    }
}

fn build_modifiers(column: &Column) -> Vec<String> {
    let mut modifiers = Vec::new();
    if column.primary_key {
        modifiers.push("pk".to_string());
    } else if column.not_null {
        modifiers.push("notNull".to_string());
    }
    if column.unique {
        modifiers.push("unique".to_string());
    }
    if let Some(default) = &column.default {
        modifiers.push(format!("default {default}"));
    }
    if let Some(raw) = &column.constraints {
        modifiers.push(raw.clone());
    }
    modifiers
}
