//! Asymmetric cryptographic algorithms.
//!
//! This module groups asymmetric cryptographic constructions built on
//! top of the crate's integer primitives.
//!
//! It includes:
//! - key pair generation,
//! - private and public key material,
//! - Diffie–Hellman key agreement.
//!
//! Each submodule corresponds to a concrete, well-specified algorithm
//! and defines its own key types and operations. Implementations are
//! intentionally explicit and self-contained, favoring clarity,
//! auditability, and specification-level correctness over abstraction.
//!
//! ## secp256k1
//!
//! The `secp256k1` module implements key generation and Diffie–Hellman
//! key agreement on the short-Weierstrass curve secp256k1 over the field
//! 𝔽ₚ where `p = 2²⁵⁶ − 2³² − 977`.
//!
//! This is a from-scratch implementation built directly on the textbook
//! group law in affine coordinates:
//! - explicit chord-and-tangent formulas,
//! - modular inversion via the extended Euclidean algorithm,
//! - double-and-add scalar multiplication.
//!
//! It makes every arithmetic step visible at the cost of speed and
//! side-channel resistance; the module documentation spells out the
//! caveats.

pub mod secp256k1;
