//! Streaming SHA-384
//!
//! This crate computes SHA-384 digests (FIPS 180-4) of byte streams fed
//! incrementally, with no dependency on an external cryptographic library.
//!
//! # Module overview
//!
//! - `hash`  
//!   The SHA-384 engine: the 1024-bit block compression function, the
//!   streaming [`Sha384`] context and the one-shot [`sha384`] function.
//!
//! - `error`  
//!   The crate error type. Hashing has no failure modes of its own; the
//!   only reportable condition is a session outgrowing the 128-bit length
//!   field.
//!
//! # Usage
//!
//! ```
//! use sha384_engine::Sha384;
//!
//! let mut hasher = Sha384::new();
//! hasher.update(b"hello ")?;
//! hasher.update(b"world")?;
//!
//! // `sum` resets the context, ready for the next message.
//! let digest = hasher.sum();
//! assert_eq!(digest, sha384_engine::sha384(b"hello world"));
//! assert!(hasher.is_empty());
//! # Ok::<(), sha384_engine::Error>(())
//! ```
//!
//! # Features
//!
//! - `speed`: fully unrolled round function
//! - `digest` (default): implementations of the RustCrypto `digest` traits
//!
//! # Design goals
//!
//! - No heap allocations
//! - Chunk-independent results: the digest depends only on the
//!   concatenation of all updates
//! - A context is reusable immediately after producing a digest

pub mod error;
pub mod hash;

pub use error::{Error, Result};
pub use hash::{Sha384, sha384};
