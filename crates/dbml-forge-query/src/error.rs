/// Errors returned by [`execute_query`](crate::execute_query).
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The statement could not be prepared (syntax error, unknown table).
    #[error("failed to prepare query: {0}")]
    Prepare(#[source] sqlx::Error),

    /// The prepared statement failed while executing.
    #[error("failed to execute query: {0}")]
    Execute(#[source] sqlx::Error),

    /// A result row could not be decoded into the record type.
    #[error("failed to populate record from row {row}: {source}")]
    Populate {
        row: usize,
        #[source]
        source: sqlx::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_populate_includes_row() {
        let err = QueryError::Populate {
            row: 3,
            source: sqlx::Error::ColumnNotFound("name".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("name"));
    }

    #[test]
    fn source_is_exposed() {
        use std::error::Error;
        let err = QueryError::Prepare(sqlx::Error::RowNotFound);
        assert!(err.source().is_some());
    }
}
