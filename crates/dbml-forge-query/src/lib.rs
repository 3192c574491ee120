//! # dbml-forge-query
//!
//! Runs a parameterized query on an open SQLite connection and decodes every
//! row into a caller-chosen record type.
//!
//! The record type declares its shape at compile time through
//! [`sqlx::FromRow`]; there is no runtime inspection of the record.
//!
//! ```no_run
//! use dbml_forge_query::{execute_query, QueryParam};
//! use sqlx::{Connection, SqliteConnection};
//!
//! #[derive(Debug, sqlx::FromRow)]
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let mut conn = SqliteConnection::connect("sqlite::memory:").await?;
//! let users: Vec<User> = execute_query(
//!     "SELECT id, name FROM users WHERE name LIKE ?",
//!     &[QueryParam::from("%Doe%")],
//!     &mut conn,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod execute;
mod param;

pub use error::QueryError;
pub use execute::execute_query;
pub use param::QueryParam;
