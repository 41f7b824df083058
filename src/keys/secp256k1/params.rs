//! Short-Weierstrass curve parameters.
//!
//! This module defines the parameter set of a curve `y² = x³ + ax + b`
//! over a prime field, together with the secp256k1 constants.
//!
//! Parameters are plain values handed to every group operation. Nothing
//! in the arithmetic reaches for a global curve, which keeps the group
//! law reusable on small test curves where every intermediate can be
//! checked by hand.

use crate::keys::secp256k1::point::Point;
use crate::primitives::U256;

/// Parameters of a short-Weierstrass curve `y² = x³ + ax + b` over 𝔽ₚ.
///
/// The generator `(gx, gy)` must be a point of order `n` on the curve.
/// The structure is `Copy` so call sites can pass it around freely.
#[derive(Clone, Copy, Debug)]
pub struct CurveParams {
    /// The field prime `p`.
    pub p: U256,

    /// The curve coefficient `a`.
    pub a: U256,

    /// The curve coefficient `b`.
    pub b: U256,

    /// x-coordinate of the generator.
    pub gx: U256,

    /// y-coordinate of the generator.
    pub gy: U256,

    /// Order of the generator.
    pub n: U256,
}

impl CurveParams {
    /// Returns the curve's generator `G` as a point.
    pub fn generator(&self) -> Point {
        Point::Affine {
            x: self.gx,
            y: self.gy,
        }
    }
}

/// The secp256k1 curve: `y² = x³ + 7` over `p = 2²⁵⁶ − 2³² − 977`.
///
/// Constants follow SEC 2, *Recommended Elliptic Curve Domain
/// Parameters*, version 2.0.
pub const SECP256K1: CurveParams = CurveParams {
    p: U256::from_be_words([
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFE_FFFF_FC2F,
    ]),
    a: U256::ZERO,
    b: U256::from_be_words([0, 0, 0, 7]),
    gx: U256::from_be_words([
        0x79BE_667E_F9DC_BBAC,
        0x55A0_6295_CE87_0B07,
        0x029B_FCDB_2DCE_28D9,
        0x59F2_815B_16F8_1798,
    ]),
    gy: U256::from_be_words([
        0x483A_DA77_26A3_C465,
        0x5DA4_FBFC_0E11_08A8,
        0xFD17_B448_A685_5419,
        0x9C47_D08F_FB10_D4B8,
    ]),
    n: U256::from_be_words([
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFE,
        0xBAAE_DCE6_AF48_A03B,
        0xBFD2_5E8C_D036_4141,
    ]),
};
