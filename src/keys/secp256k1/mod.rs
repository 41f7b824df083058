//! secp256k1 key generation and key agreement.
//!
//! This module provides a complete, self-contained implementation of
//! public/private key pairs and Diffie–Hellman shared-secret derivation
//! on the secp256k1 curve.
//!
//! The design follows a strict separation of concerns:
//! - a **high-level API** exposed via the `core` module,
//! - **low-level field and group logic** isolated in dedicated internal
//!   modules.
//!
//! ## Implementation notes
//!
//! Everything is built from the crate's own `U256`/`U512` primitives:
//! no external big-integer or curve library is involved. The group law
//! is the textbook chord-and-tangent formulation in affine coordinates,
//! with the point at infinity modeled as an explicit enum variant.
//!
//! Curve parameters travel as values rather than process-wide constants,
//! so the same arithmetic runs unchanged on tiny hand-checkable curves
//! in tests.
//!
//! ## Security caveats
//!
//! This implementation favors auditability over hardening:
//! - operations are **not** constant-time; branch and memory patterns
//!   follow the values involved,
//! - no blinding or other side-channel countermeasures are applied.
//!
//! It is suited for study and for contexts where the scalar is not a
//! long-lived secret, not as a drop-in replacement for a hardened
//! library.

/// High-level secp256k1 API.
///
/// This module exposes the public-facing interface:
/// - key pair generation,
/// - public-key encoding,
/// - Diffie–Hellman shared-secret derivation.
///
/// This is the only module most users should interact with directly.
pub(crate) mod core;

/// Finite field arithmetic.
///
/// Implements modular arithmetic over a caller-supplied prime modulus:
/// - addition, subtraction, and multiplication with full-width
///   intermediates,
/// - inversion via the extended Euclidean algorithm.
///
/// All results are reduced into `[0, m)`.
pub mod field;

/// Curve parameters.
///
/// Defines the short-Weierstrass parameter set as a value type and
/// provides the secp256k1 constants from SEC 2.
pub mod params;

/// Curve group operations.
///
/// Implements the affine group law:
/// - point doubling and addition,
/// - double-and-add scalar multiplication,
/// - curve membership checks.
pub mod point;

// Re-export the public API at the `secp256k1` level.
pub use self::core::*;
