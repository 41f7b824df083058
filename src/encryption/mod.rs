//! Symmetric combiners layered on top of key agreement.
//!
//! This module groups the symmetric primitives that consume key material
//! produced by the asymmetric layer.
//!
//! At present it contains a single member, the `xor` module, which folds
//! a 256-bit key into a byte stream. It exists to close the loop of the
//! key-agreement demonstration, not to protect data.

/// Repeating-keystream XOR combiner.
///
/// A deliberately transparent construction: the 32 key bytes repeat for
/// the length of the message, and applying the combiner twice restores
/// the original input.
///
/// # Notes
///
/// - The keystream repeats every 32 bytes, so patterns in the plaintext
///   survive into the output.
/// - This module must not be mistaken for real encryption. Pair the
///   shared secret with an audited AEAD for anything that matters.
pub mod xor;
