//! # dbml-forge-sql
//!
//! Compiles a [`Schema`](dbml_forge_core::Schema) into SQL `CREATE TABLE`
//! statements.

pub mod codegen;

pub use codegen::{generate, generate_column, generate_table};
