use dbml_forge_dsl::DslError;
use miette::{Diagnostic, NamedSource, SourceSpan};

/// A diagnostic wrapping a `DslError` for rich miette rendering.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct SchemaDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

/// Convert a `DslError` into a miette `SchemaDiagnostic` with a label on the
/// offending line and a suggested fix.
pub fn dsl_error_to_diagnostic(error: &DslError, source: &str, filename: &str) -> SchemaDiagnostic {
    let named_src = NamedSource::new(filename, source.to_string());
    let span = error.span();
    let span: SourceSpan = (span.start, span.len()).into();

    let (label, suggestion) = match error {
        DslError::ColumnOutsideTable { column, .. } => (
            "no table is open here".to_string(),
            Some(format!(
                "Move '{column}' inside a 'Table name {{ ... }}' block."
            )),
        ),
        DslError::UnterminatedTable { table, .. } => (
            "table opened here".to_string(),
            Some(format!("Add a closing '}}' after the last column of '{table}'.")),
        ),
        DslError::MalformedTableHeader { .. } => (
            "missing table name".to_string(),
            Some("Write the header as 'Table <name> {'.".to_string()),
        ),
        DslError::DuplicateTableName { .. } => (
            "name already used above".to_string(),
            Some("Rename one of the tables or merge their columns.".to_string()),
        ),
        DslError::UnmatchedClosingBrace { .. } => (
            "nothing to close".to_string(),
            Some("Remove the stray '}'.".to_string()),
        ),
        _ => ("here".to_string(), None),
    };

    SchemaDiagnostic {
        src: named_src,
        span,
        message: error.to_string(),
        label,
        suggestion,
    }
}

/// Render all parse errors for a file using miette.
pub fn render_diagnostics(
    errors: &[DslError],
    source: &str,
    filename: &str,
) -> Vec<miette::Report> {
    errors
        .iter()
        .map(|e| miette::Report::new(dsl_error_to_diagnostic(e, source, filename)))
        .collect()
}
