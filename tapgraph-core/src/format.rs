//! Text codec for the adjacency-list format.
//!
//! Each record occupies one line of the form `i, j, bit\n`: decimal ASCII
//! fields separated by a comma and a space, with no header and no trailer.
//! Pairs appear in the order the sampler emits them. A traced variant
//! appends the deciding register state as lowercase hexadecimal.

use std::io::{self, BufRead, Write};

use tracing::{debug, instrument};

use crate::{edge::EdgeRecord, error::AdjacencyParseError, sampler::EdgeStream};

/// File name the generator writes to when no path is supplied.
pub const DEFAULT_OUTPUT_FILE: &str = "adjacency_list.txt";

const FIELD_COUNT: usize = 3;

/// Counts of records written by the adjacency-list writers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeTally {
    /// Number of vertex pairs written.
    pub pairs: usize,
    /// Number of pairs marked present.
    pub edges: usize,
}

impl EdgeTally {
    fn record(&mut self, edge: &EdgeRecord) {
        self.pairs += 1;
        if edge.is_present() {
            self.edges += 1;
        }
    }
}

/// Streams `edges` to `writer` in the adjacency-list format.
///
/// # Errors
/// Returns any [`io::Error`] raised by `writer`.
///
/// # Examples
/// ```
/// use tapgraph_core::{DEFAULT_SEED, generate, write_adjacency_list};
///
/// let stream = generate(3, 8, DEFAULT_SEED).expect("parameters are valid");
/// let mut buffer = Vec::new();
/// let tally = write_adjacency_list(stream, &mut buffer).expect("writing to a Vec succeeds");
/// assert_eq!(buffer, b"0, 1, 1\n0, 2, 0\n1, 2, 0\n");
/// assert_eq!((tally.pairs, tally.edges), (3, 1));
/// ```
#[instrument(name = "core.write_adjacency_list", skip_all)]
pub fn write_adjacency_list<I, W>(edges: I, mut writer: W) -> io::Result<EdgeTally>
where
    I: IntoIterator<Item = EdgeRecord>,
    W: Write,
{
    let mut tally = EdgeTally::default();
    for edge in edges {
        writeln!(writer, "{edge}")?;
        tally.record(&edge);
    }
    debug!(pairs = tally.pairs, edges = tally.edges, "adjacency list written");
    Ok(tally)
}

/// Streams `stream` to `writer`, appending the deciding register state to
/// every line.
///
/// # Errors
/// Returns any [`io::Error`] raised by `writer`.
///
/// # Examples
/// ```
/// use tapgraph_core::{DEFAULT_SEED, generate, write_traced_adjacency_list};
///
/// let stream = generate(2, 8, DEFAULT_SEED).expect("parameters are valid");
/// let mut buffer = Vec::new();
/// write_traced_adjacency_list(stream, &mut buffer).expect("writing to a Vec succeeds");
/// assert_eq!(buffer, b"0, 1, 1, b16b00b5\n");
/// ```
#[instrument(name = "core.write_traced_adjacency_list", skip_all)]
pub fn write_traced_adjacency_list<W: Write>(
    mut stream: EdgeStream,
    mut writer: W,
) -> io::Result<EdgeTally> {
    let mut tally = EdgeTally::default();
    while let Some((edge, state)) = stream.next_traced() {
        writeln!(writer, "{edge}, {state:x}")?;
        tally.record(&edge);
    }
    debug!(pairs = tally.pairs, edges = tally.edges, "traced adjacency list written");
    Ok(tally)
}

/// Parses one adjacency-list line.
///
/// Fields are separated by commas; surrounding ASCII whitespace is ignored.
/// `line_number` is only used for error reporting.
///
/// # Errors
/// Returns an [`AdjacencyParseError`] describing the first problem found.
///
/// # Examples
/// ```
/// use tapgraph_core::{EdgeRecord, parse_line};
///
/// let edge = parse_line("3, 7, 1", 1).expect("line is well formed");
/// assert_eq!(edge, EdgeRecord::new(3, 7, true));
/// assert!(parse_line("7, 3, 1", 1).is_err());
/// ```
pub fn parse_line(line: &str, line_number: usize) -> Result<EdgeRecord, AdjacencyParseError> {
    if line.trim().is_empty() {
        return Err(AdjacencyParseError::MissingField {
            line: line_number,
            found: 0,
        });
    }
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if let Some(extra) = fields.get(FIELD_COUNT) {
        return Err(AdjacencyParseError::ExtraField {
            line: line_number,
            field: (*extra).to_owned(),
        });
    }
    let [source, target, bit] = fields.as_slice() else {
        return Err(AdjacencyParseError::MissingField {
            line: line_number,
            found: fields.len(),
        });
    };

    let source_vertex = parse_integer(source, line_number)?;
    let target_vertex = parse_integer(target, line_number)?;
    let present = match parse_integer(bit, line_number)? {
        0 => false,
        1 => true,
        got => {
            return Err(AdjacencyParseError::InvalidBit {
                line: line_number,
                got,
            });
        }
    };
    if source_vertex >= target_vertex {
        return Err(AdjacencyParseError::UnorderedPair {
            line: line_number,
            source_vertex,
            target_vertex,
        });
    }
    Ok(EdgeRecord::new(source_vertex, target_vertex, present))
}

fn parse_integer(field: &str, line_number: usize) -> Result<usize, AdjacencyParseError> {
    // `usize::from_str` accepts a leading `+`, which the format never emits.
    if !field.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid_integer(field, line_number));
    }
    field
        .parse()
        .map_err(|_| invalid_integer(field, line_number))
}

fn invalid_integer(field: &str, line_number: usize) -> AdjacencyParseError {
    AdjacencyParseError::InvalidInteger {
        line: line_number,
        field: field.to_owned(),
    }
}

/// Lazily parses records from `reader`, one per line.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use tapgraph_core::read_adjacency_list;
///
/// let mut records = read_adjacency_list(Cursor::new("0, 1, 0\n0, 2, x\n"));
/// assert!(records.next().is_some_and(|record| record.is_ok()));
/// let err = records.next().and_then(Result::err).expect("second line is malformed");
/// assert_eq!(err.line(), 2);
/// ```
pub fn read_adjacency_list<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<EdgeRecord, AdjacencyParseError>> {
    reader.lines().enumerate().map(|(index, line)| {
        let line_number = index + 1;
        let text = line.map_err(|source| AdjacencyParseError::Io {
            line: line_number,
            source,
        })?;
        parse_line(&text, line_number)
    })
}

/// Parses a complete adjacency list, stopping at the first malformed line.
///
/// # Errors
/// Returns the first [`AdjacencyParseError`] encountered.
pub fn parse_adjacency_list<R: BufRead>(reader: R) -> Result<Vec<EdgeRecord>, AdjacencyParseError> {
    read_adjacency_list(reader).collect()
}
