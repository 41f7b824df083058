//! Random number generation module
//!
//! This module provides cryptographically secure randomness facilities
//! for the crate.
//!
//! Randomness is drawn directly from the operating system's entropy
//! source through the OS abstraction layer. No user-space expansion or
//! buffering takes place: every request goes straight to the platform
//! call, and a platform failure is reported to the caller instead of
//! aborting the process.
//!
//! The primary consumer is private-key generation, which draws candidate
//! scalars from this module until one falls inside the curve's order.

use crate::os;

/// Error returned when the operating system cannot provide entropy.
pub use crate::os::EntropyError;

/// Fills a buffer with cryptographically secure random bytes.
///
/// The bytes are obtained from the operating system's entropy source:
/// `getrandom` on Linux, `arc4random_buf` on macOS, and `BCryptGenRandom`
/// on Windows.
///
/// # Errors
/// Returns [`EntropyError::Unavailable`] when the platform's random
/// source reports a failure. The buffer contents are unspecified in that
/// case and must not be used.
pub fn random_bytes(buf: &mut [u8]) -> Result<(), EntropyError> {
    os::sys_random(buf)
}
