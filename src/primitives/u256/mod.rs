//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, a fixed-size 256-bit unsigned
//! integer used throughout the crate.
//!
//! `U256` is designed as a low-level, dependency-free primitive rather than
//! a full big-integer abstraction. It provides only the set of operations
//! required by the elliptic-curve engine, with explicit semantics and
//! predictable behavior.
//!
//! Typical use cases include:
//! - curve coordinates and field elements
//! - private-key scalars
//! - modular arithmetic intermediates (together with `U512`)
//!
//! The internal representation is big-endian and remains stable across
//! all operations and conversions.

mod conv;
mod core;
mod ops;

/// Fixed-size 256-bit unsigned integer.
///
/// This type is re-exported as the primary 256-bit integer primitive.
pub use self::core::U256;
