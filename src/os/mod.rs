//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to
//! operating system services required by the crate.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same public surface,
//! allowing higher-level code to remain fully portable.
//!
//! At present, this layer only provides access to operating system entropy.
//! A failure of the platform's random source is reported as an
//! [`EntropyError`] rather than aborting the process, so that key
//! generation can surface it to the caller.
//!
//! All exposed functions are safe wrappers around low-level OS APIs.

/// Errors that may occur while requesting entropy from the operating
/// system.
#[derive(Debug)]
pub enum EntropyError {
    /// The platform's random source reported a failure.
    Unavailable,
}

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
