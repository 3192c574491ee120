use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, FromRow, SqliteConnection, Statement};

use crate::error::QueryError;
use crate::param::QueryParam;

/// Prepares `query`, binds `params` in order, runs it on `conn`, and decodes
/// every returned row into `T`.
///
/// Placeholders are positional (`?`). Rows are returned in the order the
/// database produced them.
///
/// # Errors
///
/// - [`QueryError::Prepare`] if the statement cannot be prepared.
/// - [`QueryError::Execute`] if execution fails.
/// - [`QueryError::Populate`] if a row does not fit `T`.
pub async fn execute_query<T>(
    query: &str,
    params: &[QueryParam],
    conn: &mut SqliteConnection,
) -> Result<Vec<T>, QueryError>
where
    T: for<'r> FromRow<'r, SqliteRow>,
{
    let statement = (&mut *conn)
        .prepare(query)
        .await
        .map_err(QueryError::Prepare)?;

    let mut bound = statement.query();
    for param in params {
        bound = param.bind_to(bound);
    }

    let rows = bound
        .fetch_all(&mut *conn)
        .await
        .map_err(QueryError::Execute)?;
    tracing::debug!(rows = rows.len(), "query returned rows");

    rows.iter()
        .enumerate()
        .map(|(i, row)| T::from_row(row).map_err(|source| QueryError::Populate { row: i, source }))
        .collect()
}
