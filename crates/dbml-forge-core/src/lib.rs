//! # dbml-forge-core
//!
//! In-memory model shared by the DBML parser, the DBML printer, and the SQL
//! generator: a [`Schema`](types::Schema) is an ordered list of
//! [`Table`](types::Table)s, each an ordered list of [`Column`](types::Column)s.
//!
//! Insertion order is significant everywhere and is preserved end to end.

pub mod types;

pub use types::{Column, Schema, Table};
