//! Edge probability levels expressed in sixteenths.

use std::fmt;

use crate::{Result, error::GraphError};

/// Edge probability expressed as `level / 16`, with `level` in `[1, 15]`.
///
/// A record is marked present when the sampled nibble is strictly below the
/// level, so the highest level yields 15/16 rather than certainty.
///
/// # Examples
/// ```
/// use tapgraph_core::ProbabilityLevel;
///
/// let level = ProbabilityLevel::new(8).expect("8 is in range");
/// assert!(level.admits(7));
/// assert!(!level.admits(8));
/// assert!(ProbabilityLevel::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProbabilityLevel(u8);

impl ProbabilityLevel {
    /// Smallest accepted level.
    pub const MIN: Self = Self(1);
    /// Largest accepted level.
    pub const MAX: Self = Self(15);

    /// Validates `level` and wraps it.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidProbabilityLevel`] when `level` lies
    /// outside `[1, 15]`.
    pub const fn new(level: u32) -> Result<Self> {
        if level < Self::MIN.0 as u32 || level > Self::MAX.0 as u32 {
            return Err(GraphError::InvalidProbabilityLevel { got: level });
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "level was checked to lie in [1, 15]"
        )]
        let narrowed = level as u8;
        Ok(Self(narrowed))
    }

    /// Returns the raw level.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> u8 { self.0 }

    /// Reports whether `sample` marks an edge as present.
    #[must_use]
    pub const fn admits(self, sample: u32) -> bool {
        sample < self.0 as u32
    }
}

impl TryFrom<u32> for ProbabilityLevel {
    type Error = GraphError;

    fn try_from(level: u32) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ProbabilityLevel> for u32 {
    fn from(level: ProbabilityLevel) -> Self {
        Self::from(level.0)
    }
}

impl fmt::Display for ProbabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/16", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::zero(0)]
    #[case::sixteen(16)]
    #[case::large(u32::MAX)]
    fn rejects_out_of_range_levels(#[case] raw: u32) {
        let err = ProbabilityLevel::new(raw).expect_err("level must be rejected");
        assert_eq!(err, GraphError::InvalidProbabilityLevel { got: raw });
    }

    #[rstest]
    #[case(1)]
    #[case(8)]
    #[case(15)]
    fn accepts_levels_in_range(#[case] raw: u32) {
        let level = ProbabilityLevel::try_from(raw).expect("level must be accepted");
        assert_eq!(u32::from(level), raw);
    }

    #[test]
    fn top_level_never_admits_fifteen() {
        assert!(ProbabilityLevel::MAX.admits(14));
        assert!(!ProbabilityLevel::MAX.admits(15));
    }

    #[test]
    fn displays_as_sixteenths() {
        let level = ProbabilityLevel::new(4).expect("4 is in range");
        assert_eq!(level.to_string(), "4/16");
    }
}
