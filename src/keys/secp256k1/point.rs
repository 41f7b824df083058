//! Curve group operations.
//!
//! This module implements the group law of a short-Weierstrass curve in
//! affine coordinates, using the textbook chord-and-tangent formulas.
//!
//! The point at infinity, the group's identity, is an explicit variant
//! of the point type rather than a reserved coordinate pair, so every
//! special case in the formulas is a visible branch.
//!
//! Operations are **not** constant-time: branches and the double-and-add
//! schedule follow the values involved.

use crate::keys::secp256k1::field::{self, FieldError};
use crate::keys::secp256k1::params::CurveParams;
use crate::primitives::U256;

/// A point on a short-Weierstrass curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Point {
    /// The point at infinity.
    Identity,

    /// A finite curve point in affine coordinates.
    Affine {
        /// x-coordinate.
        x: U256,

        /// y-coordinate.
        y: U256,
    },
}

impl Point {
    /// Doubles the point using the tangent rule.
    ///
    /// The slope of the tangent at `(x, y)` is `(3x² + a) / 2y`. A point
    /// with `y == 0` has a vertical tangent, so doubling it yields the
    /// point at infinity, as does doubling the identity itself.
    pub fn double(self, params: &CurveParams) -> Point {
        let (x, y) = match self {
            Point::Identity => return Point::Identity,
            Point::Affine { x, y } => (x, y),
        };

        if y == U256::ZERO {
            return Point::Identity;
        }

        let p = params.p;

        let x_sq = field::mul_mod(x, x, p);
        let numerator = field::add_mod(field::mul_mod(U256::from(3u8), x_sq, p), params.a, p);
        let denominator = field::add_mod(y, y, p);

        let slope = match field::modinv(denominator, p) {
            Ok(inv) => field::mul_mod(numerator, inv, p),
            Err(FieldError::NotInvertible) => return Point::Identity,
        };

        let x_out = field::sub_mod(field::mul_mod(slope, slope, p), field::add_mod(x, x, p), p);
        let y_out = field::sub_mod(
            field::mul_mod(slope, field::sub_mod(x, x_out, p), p),
            y,
            p,
        );

        Point::Affine { x: x_out, y: y_out }
    }

    /// Adds two points using the chord rule.
    ///
    /// The identity is the neutral element on either side. Two points
    /// sharing an x-coordinate are either equal, which delegates to
    /// [`Point::double`], or mutual inverses, which sum to the identity.
    pub fn add(self, other: Point, params: &CurveParams) -> Point {
        let ((x1, y1), (x2, y2)) = match (self, other) {
            (Point::Identity, _) => return other,
            (_, Point::Identity) => return self,
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double(params);
            }

            return Point::Identity;
        }

        let p = params.p;

        let numerator = field::sub_mod(y1, y2, p);
        let denominator = field::sub_mod(x1, x2, p);

        let slope = match field::modinv(denominator, p) {
            Ok(inv) => field::mul_mod(numerator, inv, p),
            Err(FieldError::NotInvertible) => return Point::Identity,
        };

        let x_out = field::sub_mod(
            field::sub_mod(field::mul_mod(slope, slope, p), x1, p),
            x2,
            p,
        );
        let y_out = field::sub_mod(
            field::mul_mod(slope, field::sub_mod(x1, x_out, p), p),
            y1,
            p,
        );

        Point::Affine { x: x_out, y: y_out }
    }

    /// Multiplies the point by a scalar using double-and-add.
    ///
    /// The scalar is consumed least significant bit first, and the
    /// running addend doubles once per bit. A zero scalar yields the
    /// identity. The loop runs for as many iterations as the scalar has
    /// significant bits, so the execution pattern leaks the scalar's
    /// length and population.
    pub fn mul(self, k: U256, params: &CurveParams) -> Point {
        let mut result = Point::Identity;
        let mut addend = self;
        let mut k = k;

        while k != U256::ZERO {
            if (k & U256::ONE) == U256::ONE {
                result = result.add(addend, params);
            }

            addend = addend.double(params);
            k = k >> U256::ONE;
        }

        result
    }

    /// Reports whether the point satisfies the curve equation
    /// `y² = x³ + ax + b`.
    ///
    /// The identity belongs to every curve by convention.
    pub fn is_on_curve(&self, params: &CurveParams) -> bool {
        let (x, y) = match *self {
            Point::Identity => return true,
            Point::Affine { x, y } => (x, y),
        };

        let p = params.p;

        let lhs = field::mul_mod(y, y, p);
        let x_cubed = field::mul_mod(field::mul_mod(x, x, p), x, p);
        let rhs = field::add_mod(
            field::add_mod(x_cubed, field::mul_mod(params.a, x, p), p),
            params.b,
            p,
        );

        lhs == rhs
    }
}
