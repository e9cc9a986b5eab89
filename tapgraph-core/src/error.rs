//! Error types for the tapgraph core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, io};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or starting a generation session.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// Probability level fell outside `[1, 15]`.
    #[error("probability level must lie in [1, 15] (got {got})")]
    InvalidProbabilityLevel {
        /// The rejected level supplied by the caller.
        got: u32,
    },
    /// The number of vertex pairs cannot be represented on this host.
    #[error("vertex count {got} yields more pairs than this host can address")]
    InvalidVertexCount {
        /// The rejected vertex count.
        got: usize,
    },
    /// Zero is a fixed point of the shift register and cannot seed a session.
    #[error("LFSR seed must be non-zero")]
    InvalidSeed,
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Probability level fell outside `[1, 15]`.
        InvalidProbabilityLevel => InvalidProbabilityLevel { .. } => "TAPGRAPH_INVALID_PROBABILITY_LEVEL",
        /// The number of vertex pairs cannot be represented on this host.
        InvalidVertexCount => InvalidVertexCount { .. } => "TAPGRAPH_INVALID_VERTEX_COUNT",
        /// Zero seed supplied.
        InvalidSeed => InvalidSeed => "TAPGRAPH_INVALID_SEED",
    }
}

/// An error produced while parsing an adjacency list.
///
/// Every variant that refers to file content carries the 1-based line number
/// of the offending line.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AdjacencyParseError {
    /// Reading from the underlying source failed.
    #[error("failed to read line {line}: {source}")]
    Io {
        /// Line that was being read when the failure occurred.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A line contained fewer than three fields.
    #[error("line {line}: expected 3 fields but found {found}")]
    MissingField {
        /// Offending line.
        line: usize,
        /// Number of fields present.
        found: usize,
    },
    /// A line contained more than three fields.
    #[error("line {line}: unexpected trailing field `{field}`")]
    ExtraField {
        /// Offending line.
        line: usize,
        /// First surplus field.
        field: String,
    },
    /// A field was not a decimal integer.
    #[error("line {line}: `{field}` is not a decimal integer")]
    InvalidInteger {
        /// Offending line.
        line: usize,
        /// Raw field text.
        field: String,
    },
    /// The edge bit was neither `0` nor `1`.
    #[error("line {line}: edge bit must be 0 or 1 (got {got})")]
    InvalidBit {
        /// Offending line.
        line: usize,
        /// Parsed value.
        got: usize,
    },
    /// The vertex pair was not strictly ascending.
    #[error("line {line}: pair ({source_vertex}, {target_vertex}) is not strictly ascending")]
    UnorderedPair {
        /// Offending line.
        line: usize,
        /// First vertex on the line.
        source_vertex: usize,
        /// Second vertex on the line.
        target_vertex: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`AdjacencyParseError`] variants.
    enum AdjacencyParseErrorCode for AdjacencyParseError {
        /// Reading from the underlying source failed.
        Io => Io { .. } => "ADJACENCY_IO",
        /// A line contained fewer than three fields.
        MissingField => MissingField { .. } => "ADJACENCY_MISSING_FIELD",
        /// A line contained more than three fields.
        ExtraField => ExtraField { .. } => "ADJACENCY_EXTRA_FIELD",
        /// A field was not a decimal integer.
        InvalidInteger => InvalidInteger { .. } => "ADJACENCY_INVALID_INTEGER",
        /// The edge bit was neither `0` nor `1`.
        InvalidBit => InvalidBit { .. } => "ADJACENCY_INVALID_BIT",
        /// The vertex pair was not strictly ascending.
        UnorderedPair => UnorderedPair { .. } => "ADJACENCY_UNORDERED_PAIR",
    }
}

impl AdjacencyParseError {
    /// Returns the 1-based line number the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Io { line, .. }
            | Self::MissingField { line, .. }
            | Self::ExtraField { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::InvalidBit { line, .. }
            | Self::UnorderedPair { line, .. } => *line,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
