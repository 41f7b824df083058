//! Repeating-keystream XOR combiner.
//!
//! This module provides the simplest possible symmetric transform: each
//! byte of the input is XORed with a byte of a 32-byte keystream that
//! repeats for the length of the input.
//!
//! The public API is intentionally minimal and re-exports the combiner
//! function defined in the internal `core` module.
//!
//! ## Structure
//!
//! - `core`
//!   Contains the keystream derivation and the XOR loop.
//!
//! The separation mirrors the structure used in other modules of the
//! crate, keeping algorithmic details isolated while exposing a small,
//! explicit interface.

mod core;

// Re-export the public API at the `xor` level.
pub use self::core::*;
