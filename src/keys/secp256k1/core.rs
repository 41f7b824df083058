//! Core secp256k1 key types and operations.
//!
//! This module provides the public API for key generation and
//! Diffie–Hellman shared-secret derivation on the secp256k1 curve.
//!
//! A private key is a scalar `k` in `[1, n)`, where `n` is the order of
//! the curve's generator `G`. The matching public key is the curve point
//! `k·G`. Two parties holding each other's public keys arrive at the
//! same shared secret because scalar multiplication commutes:
//! `a·(b·G) = b·(a·G)`.
//!
//! ## Provided operations
//!
//! - [`generate_keypair`]
//!   Draw a fresh key pair from operating system entropy.
//!
//! - [`exchange`]
//!   Derive the Diffie–Hellman shared secret between a private key and a
//!   peer public key.
//!
//! ## Cryptographic properties
//!
//! - Private scalars are rejection-sampled uniformly from `[1, n)`.
//! - Public keys always satisfy the curve equation and are never the
//!   point at infinity.
//! - The shared secret is the affine x-coordinate of `k·Q_peer`, encoded
//!   as 32 big-endian bytes.
//!
//! ## Scope and limitations
//!
//! This module does **not** provide:
//!
//! - parsing or decompression of encoded public keys
//! - key derivation or hashing of the raw shared secret
//! - constant-time execution or other side-channel hardening
//!
//! Those concerns must be handled by higher layers of the system.

use crate::keys::secp256k1::params::{CurveParams, SECP256K1};
use crate::keys::secp256k1::point::Point;
use crate::primitives::U256;
use crate::rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Errors that may occur during key generation or key agreement.
#[derive(Debug)]
pub enum KeyError {
    /// The operating system's entropy source failed.
    RandomnessUnavailable,

    /// A scalar lies outside the valid private-key range `[1, n)`.
    InvalidScalar,

    /// Coordinates do not describe a usable public point on the curve.
    InvalidPoint,
}

/// A secp256k1 private key.
///
/// Wraps a scalar in `[1, n)`. The scalar is kept private to the type;
/// construction goes through [`PrivateKey::from_scalar`] or key
/// generation, both of which enforce the range.
#[derive(Clone, Copy)]
pub struct PrivateKey {
    scalar: U256,
}

impl PrivateKey {
    /// Builds a private key from an existing scalar.
    ///
    /// # Errors
    /// Returns [`KeyError::InvalidScalar`] if the scalar is zero or not
    /// below the curve order `n`.
    pub fn from_scalar(scalar: U256, params: &CurveParams) -> Result<Self, KeyError> {
        if scalar == U256::ZERO || scalar >= params.n {
            return Err(KeyError::InvalidScalar);
        }

        Ok(PrivateKey { scalar })
    }

    /// Returns the secret scalar.
    ///
    /// This value is all an attacker needs to impersonate the key's
    /// owner. Handle it accordingly.
    #[inline]
    pub fn scalar(&self) -> U256 {
        self.scalar
    }

    /// Returns the scalar as 32 big-endian bytes.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.scalar.into()
    }

    /// Returns the scalar as a lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        hex_string(&self.to_bytes())
    }

    /// Derives the public key `k·G` for this private key.
    ///
    /// # Errors
    /// Returns [`KeyError::InvalidScalar`] if the multiplication lands
    /// on the point at infinity. A scalar in `[1, n)` never gets there;
    /// the case exists so a corrupted scalar cannot produce a phantom
    /// public key.
    pub fn public_key(&self, params: &CurveParams) -> Result<PublicKey, KeyError> {
        match params.generator().mul(self.scalar, params) {
            Point::Affine { x, y } => Ok(PublicKey { x, y }),
            Point::Identity => Err(KeyError::InvalidScalar),
        }
    }
}

/// A secp256k1 public key.
///
/// Wraps the affine coordinates of a finite curve point. Values of this
/// type always satisfy the curve equation: construction validates, and
/// derivation from a private key produces curve points by definition.
#[derive(Clone, Copy)]
pub struct PublicKey {
    x: U256,
    y: U256,
}

impl PublicKey {
    /// Builds a public key from affine coordinates.
    ///
    /// Both coordinates must be canonical field elements, already
    /// reduced below `p`. An unreduced coordinate can denote a point on
    /// the curve and still flip the parity bit of the compressed
    /// encoding, so it is rejected rather than reduced.
    ///
    /// # Errors
    /// Returns [`KeyError::InvalidPoint`] if a coordinate is not below
    /// `p` or if `(x, y)` does not satisfy the curve equation.
    pub fn from_affine(x: U256, y: U256, params: &CurveParams) -> Result<Self, KeyError> {
        if x >= params.p || y >= params.p {
            return Err(KeyError::InvalidPoint);
        }

        let point = Point::Affine { x, y };

        if !point.is_on_curve(params) {
            return Err(KeyError::InvalidPoint);
        }

        Ok(PublicKey { x, y })
    }

    /// Returns the x-coordinate.
    #[inline]
    pub fn x(&self) -> U256 {
        self.x
    }

    /// Returns the y-coordinate.
    #[inline]
    pub fn y(&self) -> U256 {
        self.y
    }

    /// Returns the key as a curve point.
    #[inline]
    pub fn point(&self) -> Point {
        Point::Affine {
            x: self.x,
            y: self.y,
        }
    }

    /// Returns the SEC 1 compressed encoding of the key.
    ///
    /// The first byte is `0x02` for an even y-coordinate and `0x03` for
    /// an odd one, followed by the x-coordinate as 32 big-endian bytes.
    pub fn to_compressed_bytes(&self) -> [u8; 33] {
        let mut out = [0u8; 33];

        out[0] = if self.y.is_even() { 0x02 } else { 0x03 };

        let x: [u8; 32] = self.x.into();
        out[1..].copy_from_slice(&x);

        out
    }

    /// Returns the compressed encoding as a lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        hex_string(&self.to_compressed_bytes())
    }
}

/// Generates a fresh secp256k1 key pair from operating system entropy.
///
/// This is [`generate_keypair_on`] fixed to the secp256k1 parameters.
///
/// # Errors
/// Returns [`KeyError::RandomnessUnavailable`] if the operating system's
/// entropy source fails.
pub fn generate_keypair() -> Result<(PublicKey, PrivateKey), KeyError> {
    generate_keypair_on(&SECP256K1)
}

/// Generates a fresh key pair on the given curve.
///
/// # Algorithm
///
/// 1. Draw 32 bytes from the operating system's entropy source.
/// 2. Interpret them as a big-endian scalar candidate.
/// 3. Accept the candidate if it lies in `[1, n)`; otherwise draw again.
/// 4. Multiply the generator by the accepted scalar to obtain the
///    public point.
///
/// Rejection sampling keeps the accepted scalar uniform over `[1, n)`;
/// reducing an out-of-range candidate instead would bias the low end of
/// the range. For secp256k1, `n` is close enough to 2²⁵⁶ that a redraw
/// almost never happens.
///
/// # Errors
/// Returns [`KeyError::RandomnessUnavailable`] if the operating system's
/// entropy source fails.
pub fn generate_keypair_on(params: &CurveParams) -> Result<(PublicKey, PrivateKey), KeyError> {
    let mut buf = [0u8; 32];

    let scalar = loop {
        if rng::random_bytes(&mut buf).is_err() {
            return Err(KeyError::RandomnessUnavailable);
        }

        let candidate = U256::from(buf);

        if candidate != U256::ZERO && candidate < params.n {
            break candidate;
        }
    };

    buf.fill(0);

    let private = PrivateKey { scalar };
    let public = private.public_key(params)?;

    Ok((public, private))
}

/// Derives the Diffie–Hellman shared secret between a private key and a
/// peer's public key.
///
/// Both parties compute the same point because scalar multiplication
/// commutes: `a·(b·G)` and `b·(a·G)` are both `(a·b)·G`.
///
/// # Returns
///
/// The affine x-coordinate of `k·Q_peer` as 32 big-endian bytes. The
/// raw coordinate is not a uniformly distributed byte string; derive
/// symmetric keys from it rather than using it directly.
///
/// # Errors
///
/// Returns [`KeyError::InvalidPoint`] if the multiplication lands on the
/// point at infinity. With a validated peer key on a prime-order curve
/// this does not occur; the case exists so unvalidated input cannot
/// produce a degenerate secret.
pub fn exchange(
    private: &PrivateKey,
    peer: &PublicKey,
    params: &CurveParams,
) -> Result<[u8; 32], KeyError> {
    match peer.point().mul(private.scalar(), params) {
        Point::Affine { x, .. } => Ok(x.into()),
        Point::Identity => Err(KeyError::InvalidPoint),
    }
}

/// Encodes bytes as lowercase hexadecimal.
fn hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);

    for &byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }

    out
}
