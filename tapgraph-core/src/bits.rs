//! Binary rendering of register states for debugging.

use std::fmt;

/// Renders a 32-bit word in binary, most significant bit first, as eight
/// space-separated nibbles.
///
/// # Examples
/// ```
/// use tapgraph_core::{BinaryWord, DEFAULT_SEED};
///
/// assert_eq!(
///     BinaryWord(DEFAULT_SEED).to_string(),
///     "1011 0001 0110 1011 0000 0000 1011 0101",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryWord(pub u32);

impl fmt::Display for BinaryWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for nibble in (0..8).rev() {
            let value = (self.0 >> (nibble * 4)) & 0xF;
            write!(f, "{value:04b}")?;
            if nibble > 0 {
                f.write_str(" ")?;
            }
        }
        Ok(())
    }
}
