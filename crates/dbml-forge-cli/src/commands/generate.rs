use dbml_forge_dsl::parse_with_diagnostics;
use dbml_forge_sql::generate;

use crate::cli::{GenerateArgs, GlobalOpts};
use crate::commands::{discover_dbml_files, read_source};
use crate::config::load_config;
use crate::error::CliError;
use crate::output::{with_trailing_newline, OutputContext, OutputMode};

/// Run the `generate` command: compile DBML files to SQL DDL.
///
/// The SQL of each file is joined with a blank line, in file order.
pub fn run(
    args: GenerateArgs,
    global: &GlobalOpts,
    output: &OutputContext,
) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let strict = config.resolve_strict(args.strict);
    let files = discover_dbml_files(&config.resolve_paths(&args.paths), &config.cli.extension)?;

    let mut chunks: Vec<String> = Vec::new();
    let mut total_tables = 0usize;

    for file in &files {
        let source = read_source(file)?;
        let filename = file.display().to_string();
        let parsed = parse_with_diagnostics(&source);

        output.report_diagnostics(&parsed.diagnostics, &source, &filename, strict);
        if strict && !parsed.is_clean() {
            return Err(CliError::Parse {
                errors: parsed.diagnostics,
                file: file.clone(),
            });
        }

        total_tables += parsed.schema.len();
        let sql = generate(&parsed.schema);
        tracing::info!(file = %filename, tables = parsed.schema.len(), "compiled");
        if !sql.is_empty() {
            chunks.push(sql);
        }
    }

    let sql = chunks.join("\n\n");

    match &args.output {
        Some(path) => {
            std::fs::write(path, with_trailing_newline(&sql)).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            output.success(&format!(
                "wrote {total_tables} tables to {}",
                path.display()
            ));
        }
        None => match output.mode {
            OutputMode::Json => output.print_json(&serde_json::json!({
                "files": files.len(),
                "tables": total_tables,
                "sql": sql,
            })),
            _ => output.emit_text(&sql),
        },
    }

    Ok(())
}
