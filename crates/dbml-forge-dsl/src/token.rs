use logos::Logos;

/// Tokens of a `Table` header line, e.g. `Table users {`.
///
/// Only header lines are tokenized; column lines are split on their first
/// colon and handed to the constraint parser as text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum HeaderToken {
    #[token("Table")]
    Table,

    #[token("{")]
    LBrace,

    /// Any run of non-whitespace, non-brace characters. `Tables` lexes as a
    /// word, not as the keyword.
    #[regex(r"[^ \t\r\n\f{]+")]
    Word,
}

/// The category of a single trimmed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `Table <name> {`; `name` is `None` when the header has no name token.
    TableStart { name: Option<&'a str> },
    /// A line containing a colon. Whether it becomes a column depends on
    /// whether a table is open.
    ColumnDefinition,
    /// A line consisting of exactly `}`.
    TableEnd,
    /// Blank lines, `//` comments, and anything else.
    Ignorable,
}

impl LineKind<'_> {
    /// Returns a human-readable description of this line kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::TableStart { .. } => "table start",
            Self::ColumnDefinition => "column definition",
            Self::TableEnd => "table end",
            Self::Ignorable => "ignorable",
        }
    }
}

impl std::fmt::Display for LineKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
