//! Tapgraph core library.
//!
//! Generates pseudo-random undirected graphs by deciding every unordered
//! vertex pair with a 32-bit linear-feedback shift register. The same seed,
//! vertex count and probability level always reproduce the same adjacency
//! list.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the sampler emits:
//!
//! - `graph_pairs_sampled` (counter)
//! - `graph_edges_present` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bits;
mod edge;
mod error;
mod format;
mod lfsr;
mod probability;
mod sampler;

pub use crate::{
    bits::BinaryWord,
    edge::EdgeRecord,
    error::{AdjacencyParseError, AdjacencyParseErrorCode, GraphError, GraphErrorCode, Result},
    format::{
        DEFAULT_OUTPUT_FILE, EdgeTally, parse_adjacency_list, parse_line, read_adjacency_list,
        write_adjacency_list, write_traced_adjacency_list,
    },
    lfsr::{BitStreamGenerator, DEFAULT_SEED, SAMPLE_MASK, step},
    probability::ProbabilityLevel,
    sampler::{EdgeStream, GraphEdgeSampler, SamplerBuilder, generate, pair_count},
};
