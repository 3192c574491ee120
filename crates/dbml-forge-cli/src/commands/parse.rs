use std::path::PathBuf;

use dbml_forge_dsl::{parse_with_diagnostics, print, DslError};

use crate::cli::{GlobalOpts, ParseArgs};
use crate::commands::{discover_dbml_files, read_source};
use crate::config::load_config;
use crate::error::CliError;
use crate::output::{diagnostic_json, OutputContext, OutputMode};

/// Run the `parse` command: check DBML files and report diagnostics.
pub fn run(args: ParseArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let strict = config.resolve_strict(args.strict);
    let files = discover_dbml_files(&config.resolve_paths(&args.paths), &config.cli.extension)?;

    let mut total_tables = 0usize;
    let mut total_diagnostics = 0usize;
    let mut file_results: Vec<serde_json::Value> = Vec::new();
    let mut failures: Vec<(PathBuf, Vec<DslError>)> = Vec::new();

    for file in &files {
        let source = read_source(file)?;
        let filename = file.display().to_string();
        let parsed = parse_with_diagnostics(&source);

        let tables = parsed.schema.len();
        let columns = parsed.schema.column_count();
        total_tables += tables;
        total_diagnostics += parsed.diagnostics.len();

        let failed = strict && !parsed.is_clean();
        output.report_diagnostics(&parsed.diagnostics, &source, &filename, strict);

        let dbml = (args.print_dbml && !failed).then(|| print(&parsed.schema));

        if output.mode == OutputMode::Json {
            let mut result = serde_json::json!({
                "file": filename,
                "tables": tables,
                "columns": columns,
                "diagnostics": parsed.diagnostics.iter().map(diagnostic_json).collect::<Vec<_>>(),
                "schema": parsed.schema,
            });
            if let Some(dbml) = &dbml {
                result["dbml"] = dbml.as_str().into();
            }
            file_results.push(result);
        } else {
            if let Some(dbml) = &dbml {
                output.emit_text(dbml);
            }
            output.status(&format!(
                "  {filename} .... {tables} tables, {columns} columns"
            ));
        }

        if failed {
            failures.push((file.clone(), parsed.diagnostics));
        }
    }

    let summary = format!(
        "{total_tables} tables parsed from {} files, {total_diagnostics} diagnostics",
        files.len()
    );
    match output.mode {
        OutputMode::Human if total_diagnostics > 0 => output.warn(&summary),
        OutputMode::Human => output.success(&summary),
        OutputMode::Json => output.print_json(&serde_json::json!({
            "files": files.len(),
            "tables": total_tables,
            "diagnostics": total_diagnostics,
            "strict": strict,
            "results": file_results,
        })),
        OutputMode::Plain => output.plain_row(&[
            files.len().to_string(),
            total_tables.to_string(),
            total_diagnostics.to_string(),
        ]),
    }

    strict_failure(failures).map_or(Ok(()), Err)
}

/// Folds per-file strict failures into one error carrying every diagnostic.
fn strict_failure(mut failures: Vec<(PathBuf, Vec<DslError>)>) -> Option<CliError> {
    match failures.len() {
        0 => None,
        1 => {
            let (file, errors) = failures.remove(0);
            Some(CliError::Parse { errors, file })
        }
        _ => Some(CliError::Parse {
            errors: failures.into_iter().flat_map(|(_, errors)| errors).collect(),
            file: PathBuf::from("(multiple)"),
        }),
    }
}
