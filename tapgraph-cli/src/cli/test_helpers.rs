//! Small helpers shared across CLI tests.

use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_generate;
use super::{CliError, GenerateCommand, GenerationSummary};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn command_writing_to(
    dir: &TempDir,
    vertices: Option<usize>,
    probability_level: Option<u32>,
) -> (GenerateCommand, PathBuf) {
    let output = dir.path().join("adjacency_list.txt");
    let command = GenerateCommand {
        vertices,
        probability_level,
        output: output.clone(),
        ..GenerateCommand::default()
    };
    (command, output)
}

pub(super) fn generate_with_input(
    command: GenerateCommand,
    input: &str,
) -> Result<GenerationSummary, CliError> {
    run_generate(command, Cursor::new(input.to_owned()), Vec::new())
}

pub(super) fn generate_expecting_error(command: GenerateCommand, panic_msg: &str) -> CliError {
    match generate_with_input(command, "") {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
