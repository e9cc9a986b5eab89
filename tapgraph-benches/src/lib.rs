//! Benchmark support crate for tapgraph.
//!
//! Provides the parameter types Criterion benchmarks use to label runs.

use std::fmt;

/// Parameters for a graph generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GenerationBenchParams {
    /// Number of vertices in the generated graph.
    pub vertices: usize,
    /// Edge probability level in `[1, 15]`.
    pub probability_level: u32,
}

impl GenerationBenchParams {
    /// Number of records a run emits, used for throughput reporting.
    #[must_use]
    pub fn pairs(&self) -> u64 {
        tapgraph_core::pair_count(self.vertices)
            .and_then(|pairs| u64::try_from(pairs).ok())
            .unwrap_or(u64::MAX)
    }
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.vertices, self.probability_level)
    }
}
