//! Primitive types
//!
//! This module defines low-level primitive types used throughout the
//! crate.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate full standard
//! library abstractions or full-featured big-integer libraries.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer
//! - `U512`: a fixed-size 512-bit unsigned integer
//!
//! `U256` carries curve coordinates, field elements, and scalars. `U512`
//! exists for the intermediates of field arithmetic, where products and
//! sums outgrow 256 bits before reduction.

mod u256;
mod u512;

/// Fixed-size unsigned integer primitives.
///
/// These types are re-exported as the primary primitive integers used
/// across the codebase.
pub use u256::U256;
pub use u512::U512;
