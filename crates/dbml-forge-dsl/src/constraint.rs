//! Column definitions and their bracketed modifier lists.
//!
//! A column line has the shape `name: type [mod, mod, ...]`. Recognized
//! modifiers set flags on the [`Column`]; anything else is kept verbatim in
//! [`Column::constraints`] so no source text is lost.

use dbml_forge_core::Column;

/// A single recognized (or unrecognized) modifier token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier<'a> {
    PrimaryKey,
    NotNull,
    Unique,
    Default(&'a str),
    Unknown(&'a str),
}

impl<'a> Modifier<'a> {
    fn classify(token: &'a str) -> Self {
        if token.eq_ignore_ascii_case("pk") || token.eq_ignore_ascii_case("primaryKey") {
            return Self::PrimaryKey;
        }
        if token.eq_ignore_ascii_case("notNull") || is_spaced_not_null(token) {
            return Self::NotNull;
        }
        if token.eq_ignore_ascii_case("unique") {
            return Self::Unique;
        }
        match default_value(token) {
            Some(value) => Self::Default(value),
            None => Self::Unknown(token),
        }
    }
}

fn is_spaced_not_null(token: &str) -> bool {
    let mut words = token.split_whitespace();
    matches!(
        (words.next(), words.next(), words.next()),
        (Some(a), Some(b), None) if a.eq_ignore_ascii_case("not") && b.eq_ignore_ascii_case("null")
    )
}

/// Extracts the value of a token starting with `default`.
///
/// The keyword prefix and one optional `:` after it are removed and the rest
/// is trimmed, so `default 0`, `default: 0` and `default0` all yield `0`.
/// A token with nothing after the keyword has no value.
fn default_value(token: &str) -> Option<&str> {
    const KEYWORD: &str = "default";
    let head = token.get(..KEYWORD.len())?;
    if !head.eq_ignore_ascii_case(KEYWORD) {
        return None;
    }
    let rest = token[KEYWORD.len()..].trim_start();
    let value = rest.strip_prefix(':').unwrap_or(rest).trim();
    (!value.is_empty()).then_some(value)
}

/// Parses a column definition line into a [`Column`].
///
/// Returns `None` if the line has no colon. The name is everything before the
/// first colon; the type is the first whitespace-delimited token after it; the
/// remainder is the modifier list. A trailing `,` row separator is dropped.
pub fn parse_column(line: &str) -> Option<Column> {
    let (name, definition) = line.split_once(':')?;
    let definition = definition.trim();
    let definition = definition
        .strip_suffix(',')
        .map(str::trim_end)
        .unwrap_or(definition);

    let (column_type, modifiers) = definition
        .split_once(char::is_whitespace)
        .unwrap_or((definition, ""));

    let mut column = Column::new(name.trim(), column_type);
    apply_modifiers(&mut column, modifiers);
    Some(column)
}

/// Applies a raw modifier list such as `[pk, default 0]` to a column.
pub fn apply_modifiers(column: &mut Column, raw: &str) {
    let raw = raw.trim();
    if raw.is_empty() {
        return;
    }
    let inner = raw.strip_prefix('[').unwrap_or(raw);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    let mut unknown: Vec<&str> = Vec::new();
    for token in split_top_level(inner) {
        match Modifier::classify(token) {
            Modifier::PrimaryKey => {
                column.primary_key = true;
                column.not_null = true;
            }
            Modifier::NotNull => column.not_null = true,
            Modifier::Unique => column.unique = true,
            Modifier::Default(value) => column.default = Some(value.to_string()),
            Modifier::Unknown(text) => unknown.push(text),
        }
    }

    if !unknown.is_empty() {
        let joined = unknown.join(" ");
        column.constraints = Some(match column.constraints.take() {
            Some(existing) => format!("{existing} {joined}"),
            None => joined,
        });
    }
}

/// Splits on commas that are not inside quotes, trimming each piece and
/// dropping empty ones.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"' | '`') => quote = Some(c),
            (None, ',') => {
                parts.push(s[start..i].trim());
                start = i + 1;
            }
            (None, _) => {}
        }
    }
    parts.push(s[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}
