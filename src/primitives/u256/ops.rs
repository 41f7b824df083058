//! Arithmetic and bitwise operations for `U256`
//!
//! This module implements a minimal set of arithmetic and bitwise operator
//! traits for the `U256` type.
//!
//! The goal is **not** to provide a full big-integer library, but to supply
//! only the operations that the elliptic-curve engine requires, such as:
//! - carry-propagating addition and subtraction
//! - full-width multiplication into `U512`
//! - division and remainder for modular reduction
//! - scalar bit scanning (AND, shifts) for double-and-add
//!
//! All operations are implemented explicitly on fixed-size arrays, with:
//! - no heap allocation
//! - predictable behavior
//! - wrapping semantics where appropriate
//!
//! The internal representation is big-endian. Division works on 64-bit
//! words internally because it dominates the cost of field arithmetic.

use crate::primitives::u256::U256;
use crate::primitives::u512::U512;
use std::ops::{Add, BitAnd, Div, Mul, Rem, Shl, Shr, Sub};

impl U256 {
    /// Computes the full 512-bit product of two 256-bit values.
    ///
    /// Unlike `*`, no truncation takes place. The product feeds the
    /// modular-reduction step of field multiplication, where every bit
    /// of the intermediate matters.
    pub fn widening_mul(self, rhs: U256) -> U512 {
        let mut lhs: [u64; 4] = self.into();
        let mut rhs: [u64; 4] = rhs.into();
        lhs.reverse();
        rhs.reverse();

        let mut acc = [0u64; 8];

        for (i, &a) in lhs.iter().enumerate() {
            let mut carry = 0u64;

            for (j, &b) in rhs.iter().enumerate() {
                let t = acc[i + j] as u128 + a as u128 * b as u128 + carry as u128;
                acc[i + j] = t as u64;
                carry = (t >> 64) as u64;
            }

            acc[i + 4] = carry;
        }

        acc.reverse();

        U512::from(acc)
    }

    /// Computes quotient and remainder in a single pass.
    ///
    /// The divisor is first aligned with the dividend's most significant
    /// bit, then walked down one position per step, subtracting wherever
    /// it still fits. The loop runs once per quotient bit rather than once
    /// per bit of the dividend, which keeps repeated reductions by a
    /// nearby modulus cheap.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    pub(crate) fn div_rem(self, rhs: U256) -> (U256, U256) {
        assert!(rhs != U256::ZERO, "division by zero");

        if self < rhs {
            return (U256::ZERO, self);
        }

        let shift = rhs.leading_zeros() - self.leading_zeros();
        let rhs_words: [u64; 4] = rhs.into();

        let mut remainder: [u64; 4] = self.into();
        let mut divisor = words_shl(&rhs_words, shift);
        let mut quotient = [0u64; 4];

        for bit in (0..=shift).rev() {
            if words_ge(&remainder, &divisor) {
                words_sub_assign(&mut remainder, &divisor);
                quotient[3 - (bit / 64) as usize] |= 1u64 << (bit % 64);
            }

            if bit > 0 {
                words_shr1(&mut divisor);
            }
        }

        (U256::from(quotient), U256::from(remainder))
    }
}

/// Compares two big-endian word arrays, returning `true` when `a >= b`.
fn words_ge(a: &[u64; 4], b: &[u64; 4]) -> bool {
    for i in 0..4 {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }

    true
}

/// Subtracts `rhs` from `lhs` in place. The caller guarantees `lhs >= rhs`.
fn words_sub_assign(lhs: &mut [u64; 4], rhs: &[u64; 4]) {
    let mut borrow = 0u64;

    for i in (0..4).rev() {
        let (diff, under_a) = lhs[i].overflowing_sub(rhs[i]);
        let (diff, under_b) = diff.overflowing_sub(borrow);
        lhs[i] = diff;
        borrow = (under_a || under_b) as u64;
    }
}

/// Shifts a big-endian word array left by `shift` bits (`shift < 256`).
fn words_shl(words: &[u64; 4], shift: u32) -> [u64; 4] {
    let limb = (shift / 64) as usize;
    let bit = shift % 64;
    let mut out = [0u64; 4];

    for i in 0..4 {
        let src = i + limb;

        if src < 4 {
            out[i] = words[src] << bit;

            if bit != 0 && src + 1 < 4 {
                out[i] |= words[src + 1] >> (64 - bit);
            }
        }
    }

    out
}

/// Shifts a big-endian word array right by one bit in place.
fn words_shr1(words: &mut [u64; 4]) {
    let mut carry = 0u64;

    for word in words.iter_mut() {
        let next = *word << 63;
        *word = (*word >> 1) | carry;
        carry = next;
    }
}

/// Bitwise AND between two 256-bit values.
impl BitAnd<U256> for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        let mut out = [0u8; 32];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l & r);

        U256(out)
    }
}

/// Logical left shift (`<<`) by a 256-bit value.
///
/// Only the lowest 16 bits of the shift value are considered.
/// Shifts greater than or equal to 256 bits yield zero.
impl Shl<U256> for U256 {
    type Output = U256;

    fn shl(self, rhs: U256) -> Self::Output {
        let shift = (((rhs.0[30] as u32) << 8) | rhs.0[31] as u32) as usize;

        if shift == 0 {
            return self;
        }
        if shift >= 256 {
            return U256([0; 32]);
        }

        let byte_shift = shift / 8;
        let bit_shift = (shift % 8) as u8;

        let mut tmp = [0u8; 32];
        tmp[..(32 - byte_shift)].copy_from_slice(&self.0[byte_shift..]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u8; 32];
        let mut carry = 0u8;

        for i in (0..32).rev() {
            let val = tmp[i];
            out[i] = (val << bit_shift) | carry;
            carry = val >> (8 - bit_shift);
        }

        U256(out)
    }
}

/// Logical right shift (`>>`) by a 256-bit value.
///
/// Only the lowest 16 bits of the shift value are considered.
/// Shifts greater than or equal to 256 bits yield zero.
impl Shr<U256> for U256 {
    type Output = U256;

    fn shr(self, rhs: U256) -> Self::Output {
        let shift = (((rhs.0[30] as u32) << 8) | rhs.0[31] as u32) as usize;

        if shift == 0 {
            return self;
        }
        if shift >= 256 {
            return U256([0; 32]);
        }

        let byte_shift = shift / 8;
        let bit_shift = (shift % 8) as u8;

        let mut tmp = [0u8; 32];
        tmp[byte_shift..].copy_from_slice(&self.0[..(32 - byte_shift)]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u8; 32];
        let mut carry = 0u8;

        for i in 0..32 {
            let val = tmp[i];
            out[i] = (val >> bit_shift) | carry;
            carry = val << (8 - bit_shift);
        }

        U256(out)
    }
}

/// Addition modulo 2²⁵⁶.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        let mut out = [0u8; 32];
        let mut carry = 0u16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let sum = a as u16 + b as u16 + carry;
            *o = (sum & 0xFF) as u8;
            carry = sum >> 8;
        }

        U256(out)
    }
}

/// Subtraction modulo 2²⁵⁶.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        let mut out = [0u8; 32];
        let mut borrow = 0i16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let lhs = a as i16;
            let sub = b as i16 + borrow;

            if lhs >= sub {
                *o = (lhs - sub) as u8;
                borrow = 0;
            } else {
                *o = (lhs + 256 - sub) as u8;
                borrow = 1;
            }
        }

        U256(out)
    }
}

/// Multiplication modulo 2²⁵⁶.
///
/// The result is truncated to 256 bits. Use `widening_mul` when the full
/// product is needed.
impl Mul<U256> for U256 {
    type Output = U256;

    fn mul(self, rhs: U256) -> Self::Output {
        let wide: [u8; 64] = self.widening_mul(rhs).into();

        let mut out = [0u8; 32];
        out.copy_from_slice(&wide[32..]);

        U256(out)
    }
}

/// Integer division (`/`) producing the quotient.
///
/// # Panics
/// Panics if `rhs` is zero.
impl Div<U256> for U256 {
    type Output = U256;

    fn div(self, rhs: U256) -> Self::Output {
        self.div_rem(rhs).0
    }
}

/// Remainder (`%`) of integer division.
///
/// # Panics
/// Panics if `rhs` is zero.
impl Rem<U256> for U256 {
    type Output = U256;

    fn rem(self, rhs: U256) -> Self::Output {
        self.div_rem(rhs).1
    }
}
