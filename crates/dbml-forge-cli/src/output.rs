use console::{Style, Term};
use dbml_forge_dsl::DslError;

use crate::cli::GlobalOpts;
use crate::diagnostic::render_diagnostics;
use crate::error::CliError;

/// Output format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

impl OutputMode {
    fn from_flag(format: &str) -> Self {
        match format {
            "json" => Self::Json,
            "plain" => Self::Plain,
            _ => Self::Human,
        }
    }
}

/// Where command results go.
///
/// Compiled text (SQL, canonical DBML) and JSON documents are written to
/// stdout. Status lines, warnings, and diagnostics are written to stderr so
/// stdout stays pipeable.
pub struct OutputContext {
    pub mode: OutputMode,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    pub fn from_global(global: &GlobalOpts) -> Self {
        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            mode: OutputMode::from_flag(&global.format),
            quiet: global.quiet,
            use_color,
        }
    }

    fn tag(&self, label: &str, style: Style) -> String {
        if self.use_color {
            style.apply_to(label).to_string()
        } else {
            label.to_string()
        }
    }

    /// Success line on stderr, human mode only.
    pub fn success(&self, msg: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        eprintln!("{} {msg}", self.tag("ok", Style::new().green().bold()));
    }

    pub fn warn(&self, msg: &str) {
        if self.quiet {
            return;
        }
        match self.mode {
            OutputMode::Human => {
                eprintln!("{} {msg}", self.tag("warning:", Style::new().yellow().bold()));
            }
            OutputMode::Json => eprintln!("{}", serde_json::json!({ "warning": msg })),
            OutputMode::Plain => eprintln!("warning\t{msg}"),
        }
    }

    pub fn print_error(&self, err: &CliError) {
        match self.mode {
            OutputMode::Human => {
                eprintln!("{} {err}", self.tag("error:", Style::new().red().bold()));
            }
            OutputMode::Json => eprintln!("{}", err.to_json()),
            OutputMode::Plain => eprintln!("error\t{err}"),
        }
    }

    pub fn print_json(&self, value: &serde_json::Value) {
        if let Ok(s) = serde_json::to_string_pretty(value) {
            println!("{s}");
        }
    }

    /// Progress line on stderr, human mode only.
    pub fn status(&self, msg: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        eprintln!("{msg}");
    }

    /// One tab-separated record on stdout, plain mode only.
    pub fn plain_row(&self, fields: &[String]) {
        if self.mode == OutputMode::Plain {
            println!("{}", fields.join("\t"));
        }
    }

    /// Writes compiled SQL or DBML text to stdout.
    ///
    /// JSON mode writes nothing here: callers embed the text in their JSON
    /// document instead.
    pub fn emit_text(&self, text: &str) {
        if let Some(block) = self.text_block(text) {
            print!("{block}");
        }
    }

    fn text_block(&self, text: &str) -> Option<String> {
        if self.mode == OutputMode::Json || text.is_empty() {
            return None;
        }
        Some(with_trailing_newline(text))
    }

    /// Reports the parse diagnostics of one file.
    ///
    /// Lenient diagnostics are one-line warnings. Strict ones are errors:
    /// miette source snippets in human mode, one record per line in plain
    /// mode, and nothing in JSON mode (the command's document carries them).
    pub fn report_diagnostics(
        &self,
        diagnostics: &[DslError],
        source: &str,
        filename: &str,
        strict: bool,
    ) {
        if !strict {
            if self.quiet {
                return;
            }
            for d in diagnostics {
                match self.mode {
                    OutputMode::Json => {
                        let mut value = diagnostic_json(d);
                        value["file"] = filename.into();
                        eprintln!("{}", serde_json::json!({ "warning": value }));
                    }
                    _ => self.warn(&self.diagnostic_line(filename, d)),
                }
            }
            return;
        }

        match self.mode {
            OutputMode::Human => {
                for report in render_diagnostics(diagnostics, source, filename) {
                    eprintln!("{report:?}");
                }
            }
            OutputMode::Plain => {
                for d in diagnostics {
                    eprintln!("error\t{}", self.diagnostic_line(filename, d));
                }
            }
            OutputMode::Json => {}
        }
    }

    fn diagnostic_line(&self, filename: &str, d: &DslError) -> String {
        match self.mode {
            OutputMode::Plain => format!("{filename}:{}\t{}\t{d}", d.line(), d.kind()),
            _ => format!("{filename}:{}: {d}", d.line()),
        }
    }
}

/// JSON shape of a single diagnostic.
pub fn diagnostic_json(d: &DslError) -> serde_json::Value {
    serde_json::json!({
        "kind": d.kind(),
        "line": d.line(),
        "message": d.to_string(),
    })
}

pub fn with_trailing_newline(text: &str) -> String {
    if text.is_empty() || text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}
