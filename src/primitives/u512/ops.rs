//! Arithmetic operations for `U512`
//!
//! This module implements a minimal set of arithmetic operator traits for
//! the `U512` type.
//!
//! The goal is **not** to provide a full big-integer library, but to supply
//! only the operations the field arithmetic needs on its intermediates:
//! - carry-propagating addition of two zero-extended 256-bit values
//! - remainder by a 256-bit modulus lifted to 512 bits
//!
//! All operations are implemented explicitly on fixed-size arrays, with:
//! - no heap allocation
//! - predictable behavior
//! - wrapping semantics where appropriate
//!
//! The internal representation is big-endian. The remainder works on
//! 64-bit words internally because it runs once per field multiplication.

use crate::primitives::u512::U512;
use std::ops::{Add, Rem};

/// Addition modulo 2⁵¹².
impl Add for U512 {
    type Output = U512;

    fn add(self, rhs: U512) -> Self::Output {
        let mut out = [0u8; 64];
        let mut carry = 0u16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let sum = a as u16 + b as u16 + carry;
            *o = (sum & 0xFF) as u8;
            carry = sum >> 8;
        }

        U512(out)
    }
}

/// Remainder (`%`) of integer division.
///
/// The divisor is first aligned with the dividend's most significant
/// bit, then walked down one position per step, subtracting wherever it
/// still fits. The loop runs once per quotient bit rather than once per
/// bit of the dividend.
///
/// # Panics
/// Panics if `rhs` is zero.
impl Rem<U512> for U512 {
    type Output = U512;

    fn rem(self, rhs: U512) -> Self::Output {
        assert!(rhs != U512::ZERO, "division by zero");

        if self < rhs {
            return self;
        }

        let shift = rhs.leading_zeros() - self.leading_zeros();
        let rhs_words: [u64; 8] = rhs.into();

        let mut remainder: [u64; 8] = self.into();
        let mut divisor = words_shl(&rhs_words, shift);

        for bit in (0..=shift).rev() {
            if words_ge(&remainder, &divisor) {
                words_sub_assign(&mut remainder, &divisor);
            }

            if bit > 0 {
                words_shr1(&mut divisor);
            }
        }

        U512::from(remainder)
    }
}

/// Compares two big-endian word arrays, returning `true` when `a >= b`.
fn words_ge(a: &[u64; 8], b: &[u64; 8]) -> bool {
    for i in 0..8 {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }

    true
}

/// Subtracts `rhs` from `lhs` in place. The caller guarantees `lhs >= rhs`.
fn words_sub_assign(lhs: &mut [u64; 8], rhs: &[u64; 8]) {
    let mut borrow = 0u64;

    for i in (0..8).rev() {
        let (diff, under_a) = lhs[i].overflowing_sub(rhs[i]);
        let (diff, under_b) = diff.overflowing_sub(borrow);
        lhs[i] = diff;
        borrow = (under_a || under_b) as u64;
    }
}

/// Shifts a big-endian word array left by `shift` bits (`shift < 512`).
fn words_shl(words: &[u64; 8], shift: u32) -> [u64; 8] {
    let limb = (shift / 64) as usize;
    let bit = shift % 64;
    let mut out = [0u64; 8];

    for i in 0..8 {
        let src = i + limb;

        if src < 8 {
            out[i] = words[src] << bit;

            if bit != 0 && src + 1 < 8 {
                out[i] |= words[src + 1] >> (64 - bit);
            }
        }
    }

    out
}

/// Shifts a big-endian word array right by one bit in place.
fn words_shr1(words: &mut [u64; 8]) {
    let mut carry = 0u64;

    for word in words.iter_mut() {
        let next = *word << 63;
        *word = (*word >> 1) | carry;
        carry = next;
    }
}
