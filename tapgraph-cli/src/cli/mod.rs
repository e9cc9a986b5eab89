//! Command-line interface orchestration for tapgraph.
//!
//! The CLI offers a `generate` command that writes an adjacency list, asking
//! interactively for any parameter not given on the command line, and a
//! `bits` command that renders register words for debugging.

mod commands;
mod prompt;

pub use commands::{
    BitsCommand, BitsReport, Cli, CliError, Command, ExecutionSummary, GenerateCommand,
    GenerationSummary, render_summary, run_cli, run_cli_with,
};
pub use prompt::{Parameters, PromptError, collect_parameters, prompt_parameters};

#[cfg(test)]
mod test_helpers;
