//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`)
//! used throughout the crate.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its primary use cases include:
//! - curve coordinates and field elements
//! - private-key scalars
//! - comparisons and range checks against curve constants
//!
//! The internal representation is big-endian, which aligns naturally with
//! cryptographic conventions and human-readable hexadecimal formatting.

use std::fmt::{Display, Formatter, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order.
///
/// This type intentionally exposes only minimal functionality required
/// by the curve arithmetic, favoring clarity and correctness over
/// completeness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// The value one.
    pub const ONE: Self = Self::one_be();

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([255u8; 32]);

    /// Returns the value one encoded in big-endian form.
    ///
    /// This is a `const` constructor suitable for use in constant contexts.
    pub const fn one_be() -> Self {
        let mut out = [0u8; 32];
        out[31] = 1;
        U256(out)
    }

    /// Builds a value from four 64-bit words given in big-endian order,
    /// most significant word first.
    ///
    /// This is a `const` constructor suitable for defining curve constants.
    pub const fn from_be_words(words: [u64; 4]) -> Self {
        let mut out = [0u8; 32];
        let mut i = 0;

        while i < 4 {
            let bytes = words[i].to_be_bytes();
            let mut j = 0;

            while j < 8 {
                out[i * 8 + j] = bytes[j];
                j += 1;
            }

            i += 1;
        }

        U256(out)
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// This method scans the integer from the most significant byte and
    /// returns the number of zero bits before the first one bit is encountered.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    ///
    /// # Notes
    /// This operation is used to align the operands of the long-division
    /// routine and to size quotient estimates.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Reports whether the value is even.
    ///
    /// Only the lowest bit is inspected. The parity of a curve point's
    /// y-coordinate selects the prefix of its compressed encoding.
    pub fn is_even(&self) -> bool {
        self.0[31] & 1 == 0
    }
}

impl Display for U256 {
    /// Formats the value as a colon-separated hexadecimal string.
    ///
    /// Each byte is printed as two uppercase hexadecimal characters,
    /// separated by `:` for readability.
    ///
    /// Example:
    /// `00:1F:A4:...`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}
