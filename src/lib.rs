//! Elliptic-curve key agreement from first principles
//!
//! This crate builds public/private key pairs and Diffie–Hellman shared
//! secrets on the secp256k1 curve without relying on an external curve
//! or big-integer library.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Every
//! arithmetic step, from carry propagation to the group law, is spelled
//! out in the crate's own code and can be read top to bottom.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size, low-level integer primitives: `U256` and `U512`. These
//!   types provide explicit, predictable semantics and are the
//!   fundamental building blocks for all arithmetic in the crate.
//!
//! - `rng`
//!   Access to cryptographically secure randomness. Bytes are drawn
//!   directly from the operating system's entropy source, and failures
//!   surface as errors instead of aborting the process.
//!
//! - `keys`
//!   Cryptographic key types and key-related operations on secp256k1.
//!
//!   This module defines private and public key representations, their
//!   generation from OS entropy, compressed public-key encoding, and
//!   Diffie–Hellman shared-secret derivation. The underlying field and
//!   group arithmetic lives in submodules and stays parameterized over
//!   the curve, so the same code runs on small test curves.
//!
//! - `encryption`
//!   Symmetric combiners layered on top of key agreement. Currently a
//!   repeating-keystream XOR transform that demonstrates two parties
//!   holding the same derived key. It is deliberately transparent and
//!   offers no real confidentiality.
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Curve parameters as values, never hidden globals
//!
//! This crate is not intended to replace full-featured, externally
//! audited cryptographic libraries, but to make the mechanics of
//! elliptic-curve key agreement visible and testable end to end.

mod os;

pub mod encryption;
pub mod keys;
pub mod primitives;
pub mod rng;
