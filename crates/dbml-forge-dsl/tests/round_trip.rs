use dbml_forge_core::{Column, Schema, Table};
use dbml_forge_dsl::{parse_strict, print};
use proptest::prelude::*;

/// Strategy for identifiers that contain no whitespace, colons, or commas.
fn ident() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,12}"
}

fn column_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("int".to_string()),
        Just("varchar".to_string()),
        Just("text".to_string()),
        Just("timestamp".to_string()),
        Just("boolean".to_string()),
        Just("decimal(10,2)".to_string()),
    ]
}

fn default_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("0".to_string())),
        Just(Some("\"active\"".to_string())),
        Just(Some("'a,b'".to_string())),
        Just(Some("`now()`".to_string())),
    ]
}

prop_compose! {
    fn column()(
        name in ident(),
        ty in column_type(),
        pk in any::<bool>(),
        not_null in any::<bool>(),
        unique in any::<bool>(),
        default in default_value(),
        increment in any::<bool>(),
    ) -> Column {
        let mut c = Column::new(name, ty);
        if pk {
            c = c.primary_key();
        }
        if not_null {
            c = c.not_null();
        }
        if unique {
            c = c.unique();
        }
        if let Some(d) = default {
            c = c.with_default(d);
        }
        if increment {
            c = c.with_constraint("increment");
        }
        c
    }
}

prop_compose! {
    fn table()(name in ident(), columns in prop::collection::vec(column(), 0..6)) -> Table {
        Table::with_columns(name, columns)
    }
}

proptest! {
    /// Printing then parsing reproduces the schema exactly.
    #[test]
    fn print_then_parse_round_trips(tables in prop::collection::vec(table(), 0..5)) {
        // duplicate names would only add diagnostics; strict parse needs them unique
        let mut seen = std::collections::HashSet::new();
        let tables: Vec<Table> = tables.into_iter().filter(|t| seen.insert(t.name.clone())).collect();
        let schema = Schema::from(tables);

        let printed = print(&schema);
        let reparsed = parse_strict(&printed).map_err(|e| {
            TestCaseError::fail(format!("reparse failed: {e:?}\n{printed}"))
        })?;
        prop_assert_eq!(reparsed, schema);
    }

    /// Table order in the output equals first-seen order in the input.
    #[test]
    fn table_order_is_preserved(names in prop::collection::vec(ident(), 0..8)) {
        let source: String = names
            .iter()
            .map(|n| format!("Table {n} {{\n  id: int\n}}\n"))
            .collect();
        let schema = dbml_forge_dsl::parse(&source).unwrap();
        let got: Vec<String> = schema.tables.iter().map(|t| t.name.clone()).collect();
        prop_assert_eq!(got, names);
    }

    /// Lenient parsing never panics on arbitrary line soup.
    #[test]
    fn lenient_parse_is_total(lines in prop::collection::vec("[a-zA-Z{}:\\[\\], ]{0,20}", 0..20)) {
        let source = lines.join("\n");
        prop_assert!(dbml_forge_dsl::parse(&source).is_ok());
    }
}
