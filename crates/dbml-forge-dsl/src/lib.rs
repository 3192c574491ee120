//! # dbml-forge-dsl
//!
//! Parser and printer for the DBML subset accepted by dbml-forge.
//!
//! This crate provides:
//! - A line classifier that sorts input lines into table starts, column
//!   definitions, table ends, and ignorable lines
//! - A constraint parser for the `[pk, notNull, unique, default ...]` list
//! - A two-state schema builder producing a [`Schema`](dbml_forge_core::Schema)
//! - A printer that converts a schema back to DBML text
//!
//! # Example
//!
//! ```
//! use dbml_forge_dsl::{parse, print};
//!
//! let source = "Table users {
//!   id: int [pk]
//!   email: varchar [unique, notNull]
//! }";
//!
//! let schema = parse(source).expect("lenient parse never fails");
//! assert_eq!(schema.tables.len(), 1);
//! assert_eq!(schema.tables[0].name, "users");
//!
//! let dbml = print(&schema);
//! assert!(dbml.starts_with("Table users {"));
//! ```

pub mod constraint;
pub mod error;
mod lexer;
pub mod parser;
pub mod printer;
pub mod token;

pub use error::{DslError, Span};
pub use parser::{parse, parse_strict, parse_with_diagnostics, Parsed};
pub use printer::print;
