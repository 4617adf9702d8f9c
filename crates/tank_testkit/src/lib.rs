//! # TANK Testkit
//!
//! Test utilities for the TANK codec.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - Wire test vectors shared with other client implementations
//! - Hex helpers for writing and reading those vectors
//!
//! It deliberately does not depend on `tank_codec`: strategies produce
//! plain values and vectors carry hex strings, so the codec's own tests can
//! use this crate without a dependency cycle.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod generators;
pub mod hex;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::generators::*;
    pub use crate::hex::*;
    pub use crate::vectors::*;
}

pub use generators::*;
pub use hex::*;
pub use vectors::*;
