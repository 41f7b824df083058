//! XOR combiner core.
//!
//! The combiner turns a 256-bit key into a 32-byte keystream and XORs it
//! cyclically into the input. Because XOR is its own inverse, the same
//! call both applies and removes the transform.

use crate::primitives::U256;

/// Combines data with a repeating keystream derived from `key`.
///
/// The key's 32 big-endian bytes form the keystream; byte `i` of the
/// input is XORed with keystream byte `i mod 32`. Applying the function
/// a second time with the same key restores the original bytes.
///
/// # Arguments
///
/// - `key`
///   The 256-bit key, typically a private scalar or a shared secret
///   from key agreement.
/// - `data`
///   The bytes to transform. Empty input yields empty output.
///
/// # Returns
///
/// A vector the same length as `data` holding the transformed bytes.
///
/// # Security
///
/// The keystream repeats every 32 bytes, so equal 32-byte blocks of
/// plaintext produce equal blocks of output. This utility demonstrates
/// that both ends of a key agreement hold the same key; it provides no
/// meaningful confidentiality.
pub fn combine(key: U256, data: &[u8]) -> Vec<u8> {
    let keystream: [u8; 32] = key.into();
    let mut out = Vec::with_capacity(data.len());

    for (&byte, &key_byte) in data.iter().zip(keystream.iter().cycle()) {
        out.push(byte ^ key_byte);
    }

    out
}
