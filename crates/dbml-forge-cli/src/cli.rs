use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

/// Compile DBML table definitions into SQL DDL.
///
/// dbml-forge reads a compact `Table name { column: type [modifiers] }`
/// notation and emits ready-to-run `CREATE TABLE` statements.
#[derive(Parser)]
#[command(
    name = "dbml-forge",
    version,
    about = "Compile DBML table definitions into SQL DDL",
    after_help = "Use 'dbml-forge <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: DBML_FORGE_CONFIG]
    #[arg(short = 'c', long = "config", global = true, env = "DBML_FORGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse and check .dbml files
    Parse(ParseArgs),

    /// Generate SQL DDL from .dbml files
    Generate(GenerateArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for `dbml-forge parse`.
#[derive(Args)]
pub struct ParseArgs {
    /// DBML files or directories to parse (default: configured schema dir)
    pub paths: Vec<PathBuf>,

    /// Print the parsed schema back as canonical DBML
    #[arg(long = "print")]
    pub print_dbml: bool,

    /// Treat structural warnings as errors
    #[arg(long = "strict")]
    pub strict: bool,
}

/// Arguments for `dbml-forge generate`.
#[derive(Args)]
pub struct GenerateArgs {
    /// DBML files or directories to compile (default: configured schema dir)
    pub paths: Vec<PathBuf>,

    /// Output file for generated SQL (default: stdout)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Treat structural warnings as errors
    #[arg(long = "strict")]
    pub strict: bool,
}

/// Arguments for `dbml-forge completions`.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
