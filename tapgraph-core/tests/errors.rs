//! Tests for stable error codes.

use std::io;

use rstest::rstest;
use tapgraph_core::{AdjacencyParseError, AdjacencyParseErrorCode, GraphError, GraphErrorCode};

#[rstest]
#[case(
    GraphError::InvalidProbabilityLevel { got: 0 },
    GraphErrorCode::InvalidProbabilityLevel,
    "TAPGRAPH_INVALID_PROBABILITY_LEVEL",
)]
#[case(
    GraphError::InvalidVertexCount { got: usize::MAX },
    GraphErrorCode::InvalidVertexCount,
    "TAPGRAPH_INVALID_VERTEX_COUNT",
)]
#[case(GraphError::InvalidSeed, GraphErrorCode::InvalidSeed, "TAPGRAPH_INVALID_SEED")]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] rendered: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), rendered);
    assert_eq!(expected.to_string(), rendered);
}

#[rstest]
#[case(
    AdjacencyParseError::Io { line: 1, source: io::Error::other("boom") },
    AdjacencyParseErrorCode::Io,
)]
#[case(
    AdjacencyParseError::MissingField { line: 2, found: 1 },
    AdjacencyParseErrorCode::MissingField,
)]
#[case(
    AdjacencyParseError::ExtraField { line: 3, field: "ff".into() },
    AdjacencyParseErrorCode::ExtraField,
)]
#[case(
    AdjacencyParseError::InvalidInteger { line: 4, field: "x".into() },
    AdjacencyParseErrorCode::InvalidInteger,
)]
#[case(
    AdjacencyParseError::InvalidBit { line: 5, got: 9 },
    AdjacencyParseErrorCode::InvalidBit,
)]
#[case(
    AdjacencyParseError::UnorderedPair { line: 6, source_vertex: 2, target_vertex: 1 },
    AdjacencyParseErrorCode::UnorderedPair,
)]
fn returns_expected_parse_code(
    #[case] error: AdjacencyParseError,
    #[case] expected: AdjacencyParseErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert!(error.to_string().contains(&format!("line {}", error.line())));
}

#[rstest]
fn messages_name_the_rejected_value() {
    let err = GraphError::InvalidProbabilityLevel { got: 16 };
    assert_eq!(
        err.to_string(),
        "probability level must lie in [1, 15] (got 16)"
    );
}
