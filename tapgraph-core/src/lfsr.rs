//! Linear-feedback shift register driving every edge decision.
//!
//! The register is a 32-bit Fibonacci LFSR for the irreducible polynomial
//! `x^32 + x^16 + x^7 + x^2 + 1`. Each step XORs bits 0, 15, 24 and 29 of the
//! current word, shifts the word right by one and feeds the result back into
//! bit 31.

use std::iter::FusedIterator;

use crate::{Result, error::GraphError};

/// Seed used by the reference adjacency-list generator.
pub const DEFAULT_SEED: u32 = 0xb16b_00b5;

/// Mask selecting the sample nibble from a register state.
pub const SAMPLE_MASK: u32 = 0xF;

/// Advances `state` by one LFSR step.
///
/// Zero is a fixed point: `step(0) == 0`. Non-zero states never reach zero.
///
/// # Examples
/// ```
/// use tapgraph_core::{DEFAULT_SEED, step};
///
/// assert_eq!(step(DEFAULT_SEED), 0x58b5_805a);
/// assert_eq!(step(0), 0);
/// ```
#[must_use]
pub const fn step(state: u32) -> u32 {
    let feedback = (state ^ (state >> 16) ^ (state >> 25) ^ (state >> 30)) & 1;
    (state >> 1) | (feedback << 31)
}

/// A generation session's private shift register.
///
/// The register is only ever mutated through [`BitStreamGenerator::advance`],
/// so two sessions seeded identically produce identical streams. Cloning
/// yields an independent register that continues from the same state.
///
/// Iterating yields the current state and then advances, so the first item is
/// the seed itself.
///
/// # Examples
/// ```
/// use tapgraph_core::{BitStreamGenerator, DEFAULT_SEED};
///
/// let states: Vec<u32> = BitStreamGenerator::new(DEFAULT_SEED)
///     .expect("seed is non-zero")
///     .take(3)
///     .collect();
/// assert_eq!(states, vec![0xb16b_00b5, 0x58b5_805a, 0x2c5a_c02d]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStreamGenerator {
    state: u32,
}

impl BitStreamGenerator {
    /// Creates a register seeded with `seed`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSeed`] when `seed` is zero.
    pub const fn new(seed: u32) -> Result<Self> {
        if seed == 0 {
            return Err(GraphError::InvalidSeed);
        }
        Ok(Self { state: seed })
    }

    /// Returns the current register state.
    #[must_use]
    #[rustfmt::skip]
    pub const fn state(&self) -> u32 { self.state }

    /// Returns the low nibble of the current state, in `[0, 15]`.
    #[must_use]
    pub const fn sample(&self) -> u32 {
        self.state & SAMPLE_MASK
    }

    /// Steps the register once and returns the new state.
    pub const fn advance(&mut self) -> u32 {
        self.state = step(self.state);
        self.state
    }
}

impl Default for BitStreamGenerator {
    fn default() -> Self {
        Self {
            state: DEFAULT_SEED,
        }
    }
}

impl Iterator for BitStreamGenerator {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.state;
        self.advance();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for BitStreamGenerator {}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::reference_seed(DEFAULT_SEED, 0x58b5_805a)]
    #[case::second(0x58b5_805a, 0x2c5a_c02d)]
    #[case::feedback_set(0x2c5a_c02d, 0x962d_6016)]
    #[case::low_bit_only(1, 0x8000_0000)]
    #[case::zero_is_fixed(0, 0)]
    fn step_matches_tap_formula(#[case] state: u32, #[case] expected: u32) {
        assert_eq!(step(state), expected);
    }

    #[test]
    fn rejects_zero_seed() {
        let err = BitStreamGenerator::new(0).expect_err("zero seed must be rejected");
        assert_eq!(err, GraphError::InvalidSeed);
    }

    #[test]
    fn default_uses_reference_seed() {
        assert_eq!(BitStreamGenerator::default().state(), DEFAULT_SEED);
    }

    #[test]
    fn samples_follow_reference_stream() {
        let mut generator = BitStreamGenerator::new(DEFAULT_SEED).expect("seed is non-zero");
        let mut samples = Vec::new();
        for _ in 0..8 {
            samples.push(generator.sample());
            generator.advance();
        }
        assert_eq!(samples, vec![5, 10, 13, 6, 11, 5, 2, 1]);
    }

    #[test]
    fn thirty_two_steps_from_one() {
        let state = (0..32).fold(1_u32, |state, _| step(state));
        assert_eq!(state, 0xbdad_9dd5);
    }

    #[test]
    fn clones_advance_independently() {
        let mut first = BitStreamGenerator::default();
        let second = first.clone();
        first.advance();
        assert_eq!(second.state(), DEFAULT_SEED);
        assert_ne!(first.state(), second.state());
    }

    proptest! {
        #[test]
        fn non_zero_states_never_reach_zero(seed in 1_u32..=u32::MAX) {
            let mut generator = BitStreamGenerator::new(seed).expect("seed is non-zero");
            for _ in 0..32 {
                prop_assert_ne!(generator.advance(), 0);
            }
        }

        #[test]
        fn step_is_a_pure_function(state in any::<u32>()) {
            prop_assert_eq!(step(state), step(state));
            prop_assert_eq!(step(state) & 0x7fff_ffff, state >> 1);
        }
    }
}
