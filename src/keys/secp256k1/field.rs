//! Finite field arithmetic.
//!
//! This module implements modular arithmetic over a prime field whose
//! modulus is supplied by the caller on every operation.
//!
//! Sums and products are computed with 512-bit headroom before reduction,
//! so no carry or high-order bit is ever lost, and subtraction normalizes
//! through the modulus instead of going negative. Every function returns
//! a value strictly inside `[0, m)`.
//!
//! None of these routines is constant-time.

use crate::primitives::{U256, U512};

/// Errors that may occur during field arithmetic.
#[derive(Debug)]
pub enum FieldError {
    /// The element shares a factor with the modulus and has no inverse.
    NotInvertible,
}

/// Narrows a reduced 512-bit intermediate back to 256 bits.
///
/// Callers pass values already reduced below a 256-bit modulus, so the
/// conversion cannot fail.
fn narrow(value: U512) -> U256 {
    value.try_into().unwrap()
}

/// Adds two field elements modulo `m`.
///
/// The sum is formed with 512-bit headroom, so a carry past 2²⁵⁶ is
/// preserved until the reduction. Operands need not be reduced.
///
/// # Panics
/// Panics if `m` is zero.
pub fn add_mod(a: U256, b: U256, m: U256) -> U256 {
    let sum = U512::from(a) + U512::from(b);

    narrow(sum % U512::from(m))
}

/// Subtracts `b` from `a` modulo `m`.
///
/// When `b` exceeds `a`, the difference wraps through the modulus, so no
/// negative intermediate ever appears. Operands need not be reduced.
///
/// # Panics
/// Panics if `m` is zero.
pub fn sub_mod(a: U256, b: U256, m: U256) -> U256 {
    let a = a % m;
    let b = b % m;

    if a >= b { a - b } else { m - (b - a) }
}

/// Multiplies two field elements modulo `m`.
///
/// The full 512-bit product is computed first and reduced afterwards,
/// so the result is exact for any pair of operands.
///
/// # Panics
/// Panics if `m` is zero.
pub fn mul_mod(a: U256, b: U256, m: U256) -> U256 {
    narrow(a.widening_mul(b) % U512::from(m))
}

/// Computes the modular inverse of `a` modulo `m` using the extended
/// Euclidean algorithm.
///
/// # Arguments
///
/// - `a`
///   The element to invert. It is reduced modulo `m` first.
/// - `m`
///   The modulus.
///
/// # Returns
///
/// The unique `x` in `[0, m)` with `a · x ≡ 1 (mod m)`. For `m == 1`
/// that value is `0`.
///
/// # Errors
///
/// Returns [`FieldError::NotInvertible`] when `a` and `m` share a
/// common factor. This covers `a ≡ 0 (mod m)` as well as a zero
/// modulus.
///
/// # Notes
///
/// The Bézout coefficients are carried modulo the original `m` at every
/// step. No signed intermediate exists anywhere, and the result leaves
/// the loop already normalized into `[0, m)`.
pub fn modinv(a: U256, m: U256) -> Result<U256, FieldError> {
    if m == U256::ZERO {
        return Err(FieldError::NotInvertible);
    }

    if m == U256::ONE {
        return Ok(U256::ZERO);
    }

    let modulus = m;

    let mut a = a % m;
    let mut m = m;

    if a == U256::ZERO {
        return Err(FieldError::NotInvertible);
    }

    let mut x = U256::ONE;
    let mut y = U256::ZERO;

    while a > U256::ONE {
        // Remainders hitting zero here mean gcd(a, m) > 1.
        if m == U256::ZERO {
            return Err(FieldError::NotInvertible);
        }

        let (q, r) = a.div_rem(m);

        a = m;
        m = r;

        // (x, y) <- (y, x - q·y), with both coefficients kept in [0, modulus).
        let t = y;
        y = sub_mod(x, narrow(q.widening_mul(y) % U512::from(modulus)), modulus);
        x = t;
    }

    Ok(x)
}
