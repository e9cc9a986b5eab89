//! Command definitions and execution for the tapgraph CLI.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tapgraph_core::{
    BinaryWord, DEFAULT_OUTPUT_FILE, DEFAULT_SEED, EdgeTally, GraphEdgeSampler, GraphError,
    ProbabilityLevel, SAMPLE_MASK, SamplerBuilder, step, write_adjacency_list,
    write_traced_adjacency_list,
};
use thiserror::Error;
use tracing::{info, instrument};

use super::prompt::{PromptError, collect_parameters};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tapgraph",
    about = "Generate pseudo-random graphs as adjacency lists from a 32-bit LFSR."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a graph and write its adjacency list.
    Generate(GenerateCommand),
    /// Print a register word in binary, optionally followed by its successors.
    Bits(BitsCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of vertices; prompted for when omitted.
    #[arg(long)]
    pub vertices: Option<usize>,

    /// Edge probability level in [1, 15]; prompted for when omitted.
    #[arg(long = "probability-level")]
    pub probability_level: Option<u32>,

    /// Non-zero LFSR seed, decimal or `0x`-prefixed hexadecimal.
    #[arg(long, default_value = "0xb16b00b5", value_parser = parse_word)]
    pub seed: u32,

    /// Output path, truncated on every run.
    #[arg(long, short, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Append the deciding register state to every line.
    #[arg(long = "trace-state")]
    pub trace_state: bool,
}

impl Default for GenerateCommand {
    fn default() -> Self {
        Self {
            vertices: None,
            probability_level: None,
            seed: DEFAULT_SEED,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            trace_state: false,
        }
    }
}

/// Options accepted by the `bits` command.
#[derive(Debug, Args, Clone)]
pub struct BitsCommand {
    /// Word to render, decimal or `0x`-prefixed hexadecimal.
    #[arg(value_parser = parse_word)]
    pub word: u32,

    /// Number of LFSR successors to print after the word.
    #[arg(long, default_value_t = 0)]
    pub steps: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the adjacency list failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Parameter collection failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),
    /// The core rejected the parameters.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result of a `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// File the adjacency list was written to.
    pub output: PathBuf,
    /// Number of vertices.
    pub vertices: usize,
    /// Edge probability level.
    pub probability_level: ProbabilityLevel,
    /// Seed the session started from.
    pub seed: u32,
    /// Pairs and present edges written.
    pub tally: EdgeTally,
}

/// Register states printed by the `bits` command, starting with the
/// requested word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitsReport {
    /// The word followed by its successors.
    pub states: Vec<u32>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// An adjacency list was generated.
    Generated(GenerationSummary),
    /// Register words were rendered.
    Bits(BitsReport),
}

/// Executes `cli`, prompting on `stdout` and reading `stdin` for any missing
/// parameters.
///
/// # Errors
/// Returns [`CliError`] when prompting, validation or writing fails.
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let stdin = io::stdin();
    run_cli_with(cli, stdin.lock(), io::stdout())
}

/// Executes `cli` using the supplied prompt streams.
///
/// # Errors
/// Returns [`CliError`] when prompting, validation or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use tapgraph_cli::cli::{Cli, Command, ExecutionSummary, GenerateCommand, run_cli_with};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let output = dir.path().join("graph.txt");
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         vertices: Some(3),
///         probability_level: Some(8),
///         output: output.clone(),
///         ..GenerateCommand::default()
///     }),
/// };
/// let summary = run_cli_with(cli, Cursor::new(""), Vec::new())?;
/// assert!(matches!(summary, ExecutionSummary::Generated(_)));
/// assert_eq!(std::fs::read_to_string(output)?, "0, 1, 1\n0, 2, 0\n1, 2, 0\n");
/// # Ok(())
/// # }
/// ```
pub fn run_cli_with<R: BufRead, W: Write>(
    cli: Cli,
    input: R,
    prompt: W,
) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(command) => {
            run_generate(command, input, prompt).map(ExecutionSummary::Generated)
        }
        Command::Bits(command) => Ok(ExecutionSummary::Bits(run_bits(&command))),
    }
}

#[instrument(name = "cli.generate", skip_all, fields(output = %command.output.display()))]
pub(super) fn run_generate<R: BufRead, W: Write>(
    command: GenerateCommand,
    input: R,
    prompt: W,
) -> Result<GenerationSummary, CliError> {
    let (vertices, level) =
        collect_parameters(input, prompt, command.vertices, command.probability_level)?;
    let sampler = SamplerBuilder::new()
        .with_vertices(vertices)
        .with_probability_level(level)
        .with_seed(command.seed)
        .build()?;

    let tally = write_output(&sampler, &command.output, command.trace_state).map_err(|source| {
        CliError::Io {
            path: command.output.clone(),
            source,
        }
    })?;
    info!(
        vertices,
        pairs = tally.pairs,
        edges = tally.edges,
        "adjacency list written"
    );

    Ok(GenerationSummary {
        output: command.output,
        vertices,
        probability_level: sampler.probability_level(),
        seed: sampler.seed(),
        tally,
    })
}

fn write_output(sampler: &GraphEdgeSampler, path: &Path, trace_state: bool) -> io::Result<EdgeTally> {
    let mut writer = BufWriter::new(File::create(path)?);
    let tally = if trace_state {
        write_traced_adjacency_list(sampler.edges(), &mut writer)?
    } else {
        write_adjacency_list(sampler.edges(), &mut writer)?
    };
    writer.flush()?;
    Ok(tally)
}

pub(super) fn run_bits(command: &BitsCommand) -> BitsReport {
    let states = std::iter::successors(Some(command.word), |&state| Some(step(state)))
        .take(command.steps.saturating_add(1))
        .collect();
    BitsReport { states }
}

/// Parses a word given in decimal or with a `0x` prefix in hexadecimal.
pub(super) fn parse_word(raw: &str) -> Result<u32, ParseIntError> {
    let trimmed = raw.trim();
    match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => trimmed.parse(),
    }
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tapgraph_cli::cli::{BitsReport, ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Bits(BitsReport { states: vec![0xb16b_00b5] });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "1011 0001 0110 1011 0000 0000 1011 0101  0xb16b00b5  sample 5\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated(generated) => {
            writeln!(writer, "output: {}", generated.output.display())?;
            writeln!(writer, "vertices: {}", generated.vertices)?;
            writeln!(writer, "probability level: {}", generated.probability_level)?;
            writeln!(writer, "seed: {:#010x}", generated.seed)?;
            writeln!(writer, "pairs: {}", generated.tally.pairs)?;
            writeln!(writer, "edges: {}", generated.tally.edges)?;
        }
        ExecutionSummary::Bits(report) => {
            for state in &report.states {
                writeln!(
                    writer,
                    "{}  {state:#010x}  sample {}",
                    BinaryWord(*state),
                    state & SAMPLE_MASK
                )?;
            }
        }
    }
    Ok(())
}
