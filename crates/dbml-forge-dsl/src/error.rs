use std::fmt;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a new span from start (inclusive) to end (exclusive).
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Structural problems found while building a schema from DBML text.
///
/// The lenient parser records these and keeps going; the strict parser
/// returns them as errors. `line` is 1-based; `span` covers the trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DslError {
    /// A column definition appeared while no table was open.
    ColumnOutsideTable {
        column: String,
        line: usize,
        span: Span,
    },

    /// The input ended before the table opened here was closed.
    UnterminatedTable {
        table: String,
        line: usize,
        span: Span,
    },

    /// A `Table` line had no name token.
    MalformedTableHeader { line: usize, span: Span },

    /// A table name was already used by an earlier table.
    DuplicateTableName {
        name: String,
        line: usize,
        span: Span,
    },

    /// A closing `}` appeared while no table was open.
    UnmatchedClosingBrace { line: usize, span: Span },
}

impl DslError {
    /// The 1-based source line the error points at.
    pub fn line(&self) -> usize {
        match self {
            Self::ColumnOutsideTable { line, .. }
            | Self::UnterminatedTable { line, .. }
            | Self::MalformedTableHeader { line, .. }
            | Self::DuplicateTableName { line, .. }
            | Self::UnmatchedClosingBrace { line, .. } => *line,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            Self::ColumnOutsideTable { span, .. }
            | Self::UnterminatedTable { span, .. }
            | Self::MalformedTableHeader { span, .. }
            | Self::DuplicateTableName { span, .. }
            | Self::UnmatchedClosingBrace { span, .. } => span,
        }
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ColumnOutsideTable { .. } => "column_outside_table",
            Self::UnterminatedTable { .. } => "unterminated_table",
            Self::MalformedTableHeader { .. } => "malformed_table_header",
            Self::DuplicateTableName { .. } => "duplicate_table_name",
            Self::UnmatchedClosingBrace { .. } => "unmatched_closing_brace",
        }
    }
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnOutsideTable { column, line, .. } => {
                write!(
                    f,
                    "column '{column}' on line {line} is not inside a table block"
                )
            }
            Self::UnterminatedTable { table, line, .. } => {
                write!(
                    f,
                    "table '{table}' opened on line {line} is never closed with '}}'"
                )
            }
            Self::MalformedTableHeader { line, .. } => {
                write!(f, "table declaration on line {line} has no table name")
            }
            Self::DuplicateTableName { name, line, .. } => {
                write!(f, "duplicate table name '{name}' on line {line}")
            }
            Self::UnmatchedClosingBrace { line, .. } => {
                write!(f, "closing '}}' on line {line} has no open table")
            }
        }
    }
}

impl std::error::Error for DslError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_display() {
        let span = Span::new(10, 20);
        assert_eq!(span.to_string(), "10..20");
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn error_display_column_outside_table() {
        let err = DslError::ColumnOutsideTable {
            column: "foo".into(),
            line: 1,
            span: Span::new(0, 8),
        };
        let msg = err.to_string();
        assert!(msg.contains("'foo'"));
        assert!(msg.contains("line 1"));
    }

    #[test]
    fn error_display_unterminated_table() {
        let err = DslError::UnterminatedTable {
            table: "users".into(),
            line: 3,
            span: Span::new(5, 18),
        };
        assert_eq!(
            err.to_string(),
            "table 'users' opened on line 3 is never closed with '}'"
        );
    }

    #[test]
    fn error_display_unmatched_brace() {
        let err = DslError::UnmatchedClosingBrace {
            line: 7,
            span: Span::new(40, 41),
        };
        assert_eq!(err.to_string(), "closing '}' on line 7 has no open table");
    }

    #[test]
    fn accessors() {
        let err = DslError::DuplicateTableName {
            name: "users".into(),
            line: 9,
            span: Span::new(50, 63),
        };
        assert_eq!(err.line(), 9);
        assert_eq!(err.span(), &Span::new(50, 63));
        assert_eq!(err.kind(), "duplicate_table_name");
    }

    #[test]
    fn error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DslError::MalformedTableHeader {
            line: 1,
            span: Span::new(0, 5),
        });
        assert!(err.to_string().contains("no table name"));
    }
}
