//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-384 with a pure-Rust implementation.

pub mod sha384;

/// Re-export of the streaming context and the one-shot function.
pub use sha384::{Sha384, sha384};
