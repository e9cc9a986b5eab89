//! Interactive collection of generation parameters.
//!
//! The vertex count is asked for once; the probability level is asked for
//! until the operator supplies a value in `[1, 15]`.

use std::io::{self, BufRead, Write};

use tapgraph_core::ProbabilityLevel;
use thiserror::Error;
use tracing::warn;

const VERTICES_PROMPT: &str = "Enter number of vertices: ";
const LEVEL_PROMPT: &str =
    "Enter edge probability level between 1 and 15 (edge probability is level/16): ";

/// Parameters supplied by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    /// Number of vertices.
    pub vertices: usize,
    /// Edge probability level.
    pub probability_level: ProbabilityLevel,
}

/// Errors raised while prompting for parameters.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Reading input or writing a prompt failed.
    #[error("failed to prompt for parameters: {0}")]
    Io(#[from] io::Error),
    /// Input ended before a value was supplied.
    #[error("input ended while waiting for the {what}")]
    EndOfInput {
        /// Which value was being collected.
        what: &'static str,
    },
    /// The vertex count was not a non-negative integer.
    #[error("`{input}` is not a valid number of vertices")]
    InvalidVertexCount {
        /// Trimmed operator input.
        input: String,
    },
}

/// Collects whichever of `vertices` and `probability_level` is missing by
/// prompting on `output` and reading lines from `input`.
///
/// A supplied `probability_level` is passed through unvalidated so that the
/// sampler reports the error; prompted levels are re-asked until valid.
///
/// # Errors
/// Returns [`PromptError`] when I/O fails, input ends early or the vertex
/// count cannot be parsed.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use tapgraph_cli::cli::collect_parameters;
///
/// let mut prompts = Vec::new();
/// let (vertices, level) =
///     collect_parameters(Cursor::new("6\n0\n12\n"), &mut prompts, None, None)
///         .expect("input supplies both values");
/// assert_eq!((vertices, level), (6, 12));
/// ```
pub fn collect_parameters<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    vertices: Option<usize>,
    probability_level: Option<u32>,
) -> Result<(usize, u32), PromptError> {
    let vertices = match vertices {
        Some(count) => count,
        None => prompt_vertices(&mut input, &mut output)?,
    };
    let level = match probability_level {
        Some(level) => level,
        None => u32::from(prompt_level(&mut input, &mut output)?.get()),
    };
    Ok((vertices, level))
}

/// Prompts for both values.
///
/// # Errors
/// See [`collect_parameters`].
pub fn prompt_parameters<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<Parameters, PromptError> {
    let vertices = prompt_vertices(&mut input, &mut output)?;
    let probability_level = prompt_level(&mut input, &mut output)?;
    Ok(Parameters {
        vertices,
        probability_level,
    })
}

fn prompt_vertices<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize, PromptError> {
    let line = ask(input, output, VERTICES_PROMPT, "number of vertices")?;
    line.parse()
        .map_err(|_| PromptError::InvalidVertexCount { input: line })
}

fn prompt_level<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<ProbabilityLevel, PromptError> {
    loop {
        let line = ask(input, output, LEVEL_PROMPT, "probability level")?;
        match line.parse::<u32>().ok().map(ProbabilityLevel::new) {
            Some(Ok(level)) => return Ok(level),
            _ => warn!(input = %line, "probability level rejected, asking again"),
        }
    }
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    what: &'static str,
) -> Result<String, PromptError> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::EndOfInput { what });
    }
    Ok(line.trim().to_owned())
}
