//! Error types
//!
//! Hashing itself cannot fail: every byte sequence has a digest. The only
//! failure a session can hit is running out of room in the 128-bit length
//! field that the padding encodes.

use std::io;

use crate::hash::sha384::MAX_MESSAGE_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(
        "message too long for SHA-384 (absorbed {absorbed} bytes, {attempted} more would exceed {} bytes)",
        MAX_MESSAGE_LEN
    )]
    MessageTooLong { absorbed: u128, attempted: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
