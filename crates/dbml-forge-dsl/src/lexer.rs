use logos::Logos;

use crate::error::Span;
use crate::token::{HeaderToken, LineKind};

/// A trimmed input line with its 1-based number and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
    pub span: Span,
}

/// Splits source text on LF and trims each line.
///
/// Spans point at the trimmed text, so a `\r` before the LF is excluded.
pub fn lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0;
    source.split('\n').enumerate().map(move |(i, raw)| {
        let start = offset + (raw.len() - raw.trim_start().len());
        offset += raw.len() + 1;
        let text = raw.trim();
        SourceLine {
            number: i + 1,
            text,
            span: Span::new(start, start + text.len()),
        }
    })
}

/// Classifies a single trimmed line.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with("//") {
        return LineKind::Ignorable;
    }
    if let Some(name) = table_header(line) {
        return LineKind::TableStart { name };
    }
    if line.contains(':') {
        return LineKind::ColumnDefinition;
    }
    if line == "}" {
        return LineKind::TableEnd;
    }
    LineKind::Ignorable
}

/// Returns `Some(name)` if the line starts with the `Table` keyword.
///
/// The inner option is `None` when no name token follows the keyword.
fn table_header(line: &str) -> Option<Option<&str>> {
    let mut lexer = HeaderToken::lexer(line);
    match lexer.next() {
        Some(Ok(HeaderToken::Table)) => {}
        _ => return None,
    }
    match lexer.next() {
        Some(Ok(HeaderToken::Word)) => Some(Some(lexer.slice())),
        _ => Some(None),
    }
}
