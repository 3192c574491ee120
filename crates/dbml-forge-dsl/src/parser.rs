use std::collections::HashSet;

use dbml_forge_core::{Schema, Table};

use crate::constraint::parse_column;
use crate::error::{DslError, Span};
use crate::lexer::{classify, lines, SourceLine};
use crate::token::LineKind;

/// The result of a parse together with every structural problem found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub schema: Schema,
    pub diagnostics: Vec<DslError>,
}

impl Parsed {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Whether a table is currently open. The open table is addressed by its
/// index into `Schema::tables`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    InTable(usize),
}

/// Line-driven schema builder.
///
/// Consumes classified lines one at a time and accumulates tables in
/// first-seen order. Never fails: problems are recorded as diagnostics.
struct Builder {
    schema: Schema,
    state: State,
    /// Header line number and span of each table, indexed like `schema.tables`.
    headers: Vec<(usize, Span)>,
    seen_names: HashSet<String>,
    diagnostics: Vec<DslError>,
}

impl Builder {
    fn new() -> Self {
        Self {
            schema: Schema::new(),
            state: State::Idle,
            headers: Vec::new(),
            seen_names: HashSet::new(),
            diagnostics: Vec::new(),
        }
    }

    fn feed(&mut self, line: &SourceLine<'_>) {
        match classify(line.text) {
            LineKind::TableStart { name: Some(name) } => self.open_table(name, line),
            LineKind::TableStart { name: None } => {
                self.diagnostics.push(DslError::MalformedTableHeader {
                    line: line.number,
                    span: line.span.clone(),
                });
                self.state = State::Idle;
            }
            LineKind::ColumnDefinition => self.add_column(line),
            LineKind::TableEnd => match self.state {
                State::InTable(index) => {
                    tracing::trace!(table = %self.schema.tables[index].name, "closed table");
                    self.state = State::Idle;
                }
                State::Idle => self.diagnostics.push(DslError::UnmatchedClosingBrace {
                    line: line.number,
                    span: line.span.clone(),
                }),
            },
            LineKind::Ignorable => {}
        }
    }

    fn open_table(&mut self, name: &str, line: &SourceLine<'_>) {
        if !self.seen_names.insert(name.to_string()) {
            self.diagnostics.push(DslError::DuplicateTableName {
                name: name.to_string(),
                line: line.number,
                span: line.span.clone(),
            });
        }
        if let State::InTable(previous) = self.state {
            self.unterminated(previous);
        }

        let index = self.schema.push_table(Table::new(name));
        self.headers.push((line.number, line.span.clone()));
        self.state = State::InTable(index);
        tracing::debug!(table = name, line = line.number, "opened table");
    }

    fn add_column(&mut self, line: &SourceLine<'_>) {
        let Some(column) = parse_column(line.text) else {
            return;
        };
        match self.state {
            State::InTable(index) => self.schema.tables[index].columns.push(column),
            State::Idle => self.diagnostics.push(DslError::ColumnOutsideTable {
                column: column.name,
                line: line.number,
                span: line.span.clone(),
            }),
        }
    }

    fn unterminated(&mut self, index: usize) {
        let (line, span) = self.headers[index].clone();
        self.diagnostics.push(DslError::UnterminatedTable {
            table: self.schema.tables[index].name.clone(),
            line,
            span,
        });
    }

    fn finish(mut self) -> Parsed {
        if let State::InTable(index) = self.state {
            self.unterminated(index);
        }
        self.diagnostics.sort_by_key(DslError::line);
        Parsed {
            schema: self.schema,
            diagnostics: self.diagnostics,
        }
    }
}

/// Parses DBML text and returns the schema along with all diagnostics.
pub fn parse_with_diagnostics(source: &str) -> Parsed {
    let mut builder = Builder::new();
    for line in lines(source) {
        builder.feed(&line);
    }
    builder.finish()
}

/// Parses DBML text leniently.
///
/// Malformed input is interpreted on a best-effort basis: column lines
/// outside a table are dropped, stray `}` are ignored, and a table left open
/// at end of input keeps the columns collected so far. Each such problem is
/// logged at `warn` level. This function always returns `Ok`.
///
/// # Errors
///
/// Never returns `Err`; the `Result` mirrors [`parse_strict`] so callers can
/// switch between the two.
pub fn parse(source: &str) -> Result<Schema, Vec<DslError>> {
    let parsed = parse_with_diagnostics(source);
    for diagnostic in &parsed.diagnostics {
        tracing::warn!(kind = diagnostic.kind(), "{diagnostic}");
    }
    Ok(parsed.schema)
}

/// Parses DBML text, treating every diagnostic as a hard failure.
///
/// # Errors
///
/// Returns all diagnostics, ordered by line, if any were found.
pub fn parse_strict(source: &str) -> Result<Schema, Vec<DslError>> {
    let parsed = parse_with_diagnostics(source);
    if parsed.diagnostics.is_empty() {
        Ok(parsed.schema)
    } else {
        Err(parsed.diagnostics)
    }
}
