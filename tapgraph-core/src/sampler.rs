//! Edge sampling over every unordered vertex pair.
//!
//! Exposes [`SamplerBuilder`] for validated configuration, the restartable
//! [`GraphEdgeSampler`] session, the lazy [`EdgeStream`] it produces, and the
//! one-shot [`generate`] entry point.

use std::iter::FusedIterator;

use tracing::{debug, instrument};

use crate::{
    Result,
    edge::EdgeRecord,
    error::GraphError,
    lfsr::{BitStreamGenerator, DEFAULT_SEED},
    probability::ProbabilityLevel,
};

const DEFAULT_PROBABILITY_LEVEL: u32 = 8;

/// Returns the number of unordered pairs among `vertices` vertices, or `None`
/// when the count does not fit in `usize`.
///
/// # Examples
/// ```
/// use tapgraph_core::pair_count;
///
/// assert_eq!(pair_count(0), Some(0));
/// assert_eq!(pair_count(1), Some(0));
/// assert_eq!(pair_count(5), Some(10));
/// assert_eq!(pair_count(usize::MAX), None);
/// ```
#[must_use]
pub const fn pair_count(vertices: usize) -> Option<usize> {
    if vertices < 2 {
        return Some(0);
    }
    // Halve the even factor first so the product only overflows when the
    // result itself does.
    if vertices % 2 == 0 {
        (vertices / 2).checked_mul(vertices - 1)
    } else {
        vertices.checked_mul((vertices - 1) / 2)
    }
}

/// Configures and constructs [`GraphEdgeSampler`] instances.
///
/// Defaults to zero vertices, probability level 8 and the reference seed.
///
/// # Examples
/// ```
/// use tapgraph_core::{DEFAULT_SEED, SamplerBuilder};
///
/// let sampler = SamplerBuilder::new()
///     .with_vertices(4)
///     .with_probability_level(12)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(sampler.pair_count(), 6);
/// assert_eq!(sampler.seed(), DEFAULT_SEED);
/// ```
#[derive(Debug, Clone)]
pub struct SamplerBuilder {
    vertices: usize,
    probability_level: u32,
    seed: u32,
}

impl Default for SamplerBuilder {
    fn default() -> Self {
        Self {
            vertices: 0,
            probability_level: DEFAULT_PROBABILITY_LEVEL,
            seed: DEFAULT_SEED,
        }
    }
}

impl SamplerBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices.
    #[must_use]
    pub const fn with_vertices(mut self, vertices: usize) -> Self {
        self.vertices = vertices;
        self
    }

    /// Returns the configured number of vertices.
    #[must_use]
    pub const fn vertices(&self) -> usize {
        self.vertices
    }

    /// Overrides the probability level. Validation happens in [`Self::build`].
    #[must_use]
    pub const fn with_probability_level(mut self, level: u32) -> Self {
        self.probability_level = level;
        self
    }

    /// Returns the configured, not yet validated, probability level.
    #[must_use]
    pub const fn probability_level(&self) -> u32 {
        self.probability_level
    }

    /// Overrides the LFSR seed. Validation happens in [`Self::build`].
    #[must_use]
    pub const fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Validates the configuration and constructs a [`GraphEdgeSampler`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidProbabilityLevel`] when the level lies
    /// outside `[1, 15]`, [`GraphError::InvalidSeed`] for a zero seed and
    /// [`GraphError::InvalidVertexCount`] when the pair count overflows.
    pub fn build(self) -> Result<GraphEdgeSampler> {
        let level = ProbabilityLevel::new(self.probability_level)?;
        let generator = BitStreamGenerator::new(self.seed)?;
        let pairs = pair_count(self.vertices).ok_or(GraphError::InvalidVertexCount {
            got: self.vertices,
        })?;
        Ok(GraphEdgeSampler {
            vertices: self.vertices,
            level,
            generator,
            pairs,
        })
    }
}

/// A validated generation session.
///
/// Every call to [`GraphEdgeSampler::edges`] restarts from the seed, so the
/// same sampler always yields the same sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdgeSampler {
    vertices: usize,
    level: ProbabilityLevel,
    generator: BitStreamGenerator,
    pairs: usize,
}

impl GraphEdgeSampler {
    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertices(&self) -> usize { self.vertices }

    /// Returns the validated probability level.
    #[must_use]
    #[rustfmt::skip]
    pub const fn probability_level(&self) -> ProbabilityLevel { self.level }

    /// Returns the seed every stream starts from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u32 { self.generator.state() }

    /// Returns the number of records each stream yields.
    #[must_use]
    #[rustfmt::skip]
    pub const fn pair_count(&self) -> usize { self.pairs }

    /// Starts a fresh stream of edge records from the seed.
    ///
    /// # Examples
    /// ```
    /// use tapgraph_core::SamplerBuilder;
    ///
    /// let sampler = SamplerBuilder::new()
    ///     .with_vertices(3)
    ///     .build()
    ///     .expect("configuration is valid");
    /// let bits: Vec<u8> = sampler.edges().map(|edge| edge.bit()).collect();
    /// assert_eq!(bits, vec![1, 0, 0]);
    /// assert_eq!(sampler.edges().count(), 3);
    /// ```
    #[must_use]
    pub fn edges(&self) -> EdgeStream {
        debug!(
            vertices = self.vertices,
            pairs = self.pairs,
            level = %self.level,
            "starting edge stream"
        );
        EdgeStream {
            vertices: self.vertices,
            level: self.level,
            generator: self.generator.clone(),
            source: 0,
            target: 1,
            remaining: self.pairs,
            present: 0,
        }
    }
}

/// Validates the parameters and returns the lazy edge stream they define.
///
/// Equivalent to configuring a [`SamplerBuilder`] and calling
/// [`GraphEdgeSampler::edges`].
///
/// # Errors
/// Returns [`GraphError::InvalidProbabilityLevel`] when `probability_level`
/// lies outside `[1, 15]`, [`GraphError::InvalidSeed`] for a zero `seed` and
/// [`GraphError::InvalidVertexCount`] when the pair count overflows.
///
/// # Examples
/// ```
/// use tapgraph_core::{DEFAULT_SEED, EdgeRecord, generate};
///
/// let edges: Vec<EdgeRecord> = generate(3, 8, DEFAULT_SEED)
///     .expect("parameters are valid")
///     .collect();
/// assert_eq!(
///     edges,
///     vec![
///         EdgeRecord::new(0, 1, true),
///         EdgeRecord::new(0, 2, false),
///         EdgeRecord::new(1, 2, false),
///     ],
/// );
/// ```
#[instrument(
    name = "core.generate",
    err,
    skip_all,
    fields(
        vertices = num_vertices,
        probability_level = probability_level,
        seed = %format!("{seed:#010x}"),
    ),
)]
pub fn generate(num_vertices: usize, probability_level: u32, seed: u32) -> Result<EdgeStream> {
    let sampler = SamplerBuilder::new()
        .with_vertices(num_vertices)
        .with_probability_level(probability_level)
        .with_seed(seed)
        .build()?;
    Ok(sampler.edges())
}

/// Lazy, finite stream of [`EdgeRecord`]s in lexicographic pair order.
///
/// The register advances exactly once per emitted record. Dropping the stream
/// early is always safe.
#[derive(Debug, Clone)]
pub struct EdgeStream {
    vertices: usize,
    level: ProbabilityLevel,
    generator: BitStreamGenerator,
    source: usize,
    target: usize,
    remaining: usize,
    present: usize,
}

impl EdgeStream {
    /// Returns the register state that will decide the next record.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.generator.state()
    }

    /// Returns how many records emitted so far were marked present.
    #[must_use]
    pub const fn present_edges(&self) -> usize {
        self.present
    }

    /// Returns the number of vertices the stream enumerates.
    #[must_use]
    pub const fn vertices(&self) -> usize {
        self.vertices
    }

    /// Emits the next record together with the register state that decided
    /// it.
    ///
    /// # Examples
    /// ```
    /// use tapgraph_core::{DEFAULT_SEED, generate};
    ///
    /// let mut stream = generate(2, 8, DEFAULT_SEED).expect("parameters are valid");
    /// let (edge, state) = stream.next_traced().expect("one pair");
    /// assert_eq!(state, DEFAULT_SEED);
    /// assert!(edge.is_present());
    /// assert!(stream.next_traced().is_none());
    /// ```
    pub fn next_traced(&mut self) -> Option<(EdgeRecord, u32)> {
        if self.remaining == 0 {
            return None;
        }
        let state = self.generator.state();
        let present = self.level.admits(self.generator.sample());
        let record = EdgeRecord::new(self.source, self.target, present);
        self.generator.advance();

        self.target += 1;
        if self.target == self.vertices {
            self.source += 1;
            self.target = self.source + 1;
        }
        self.remaining -= 1;
        if present {
            self.present += 1;
        }
        record_decision(present);

        if self.remaining == 0 {
            debug!(
                vertices = self.vertices,
                present_edges = self.present,
                "edge stream exhausted"
            );
        }
        Some((record, state))
    }
}

impl Iterator for EdgeStream {
    type Item = EdgeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_traced().map(|(record, _)| record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for EdgeStream {}

impl FusedIterator for EdgeStream {}

#[cfg(feature = "metrics")]
fn record_decision(present: bool) {
    metrics::counter!("graph_pairs_sampled").increment(1);
    if present {
        metrics::counter!("graph_edges_present").increment(1);
    }
}

#[cfg(not(feature = "metrics"))]
const fn record_decision(_present: bool) {}
