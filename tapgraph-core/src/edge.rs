//! Edge decisions emitted by the sampler.

use std::fmt;

/// The decision for one unordered vertex pair.
///
/// `source` is always strictly below `target`. Rendering with [`Display`]
/// produces the adjacency-list line body `"source, target, bit"`.
///
/// [`Display`]: fmt::Display
///
/// # Examples
/// ```
/// use tapgraph_core::EdgeRecord;
///
/// let edge = EdgeRecord::new(0, 2, true);
/// assert_eq!(edge.bit(), 1);
/// assert_eq!(edge.to_string(), "0, 2, 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRecord {
    source: usize,
    target: usize,
    present: bool,
}

impl EdgeRecord {
    /// Creates a new edge record.
    #[must_use]
    pub const fn new(source: usize, target: usize, present: bool) -> Self {
        Self {
            source,
            target,
            present,
        }
    }

    /// Returns the lower vertex of the pair.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the higher vertex of the pair.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Reports whether the pair is joined by an edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_present(&self) -> bool { self.present }

    /// Returns the decision as `0` or `1`.
    #[must_use]
    pub const fn bit(&self) -> u8 {
        if self.present { 1 } else { 0 }
    }
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.source, self.target, self.bit())
    }
}
