use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::CliError;

const BIN_NAME: &str = "dbml-forge";

/// Write the completion script for `args.shell` to stdout.
pub fn run(args: CompletionsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    write_completions(args.shell, &mut stdout);
    stdout.flush().map_err(|e| CliError::Other(e.to_string()))
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, out);
}
