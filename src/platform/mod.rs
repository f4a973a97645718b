//! # Platform Capabilities Module
//!
//! This module isolates the platform services the UI consumes behind traits,
//! so screens never talk to the operating system directly.
//!
//! ## Module Organization:
//! - `share` - Sharing capability (share sheet / clipboard fallback)

pub mod share;

pub use share::*;
