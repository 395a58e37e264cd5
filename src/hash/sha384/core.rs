//! SHA-384 core hashing functions
//!
//! This module implements the SHA-384 hash function as defined in
//! FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - [`Sha384`], a streaming context fed through repeated updates
//! - [`sha384`], a one-shot function for input already in memory
//!
//! No heap allocations are performed. The context carries its partial
//! block in a fixed 128-byte buffer.

use std::{fmt, io};

use tracing::{trace, warn};

use super::computations::all_rounds;
use super::{BLOCK_LEN, DIGEST_LEN, H384_INIT, MAX_MESSAGE_LEN};
use crate::error::{Error, Result};

/// Parses the first 128 bytes of `block` as sixteen big-endian words.
#[inline(always)]
fn load_words(block: &[u8]) -> [u64; 16] {
    std::array::from_fn(|i| {
        let mut word = [0u8; 8];
        word.copy_from_slice(&block[i * 8..i * 8 + 8]);
        u64::from_be_bytes(word)
    })
}

/// Compresses a single 1024-bit message block.
///
/// This function performs the SHA-512 family compression step on a single
/// 128-byte block, updating the chaining value in place. It is pure and
/// cannot fail.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
///
/// # Notes
/// - Input words are interpreted as big-endian.
/// - The message schedule is expanded on the fly by `all_rounds`.
#[inline]
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u64; 8]) {
    all_rounds(state, load_words(block));
}

/// Streaming SHA-384 context.
///
/// Bytes are fed through [`Sha384::update`] in chunks of any size; the
/// digest depends only on the concatenation of all chunks. Every full
/// block is compressed as soon as it is formed, so at most 127 bytes are
/// ever buffered.
///
/// [`Sha384::sum`] returns the digest **and resets the context** to its
/// initial state. The same context can be used for the next, unrelated
/// message straight away, without calling [`Sha384::reset`]. There is no
/// "finalized" state in which the context becomes unusable.
///
/// The context is a plain value with no external resources. Independent
/// contexts can be driven from separate threads; a single context needs
/// `&mut` access for every operation.
#[derive(Clone)]
pub struct Sha384 {
    /// Chaining value after all compressed blocks
    state: [u64; 8],

    /// Bytes of the current, incomplete block
    buffer: [u8; BLOCK_LEN],

    /// Number of valid bytes in `buffer`, always `len % 128`
    buffered: usize,

    /// Total bytes absorbed since the last reset
    len: u128,
}

impl Sha384 {
    /// Creates a fresh context: initial hash value, empty buffer, zero length.
    pub fn new() -> Self {
        Self {
            state: H384_INIT,
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            len: 0,
        }
    }

    /// Discards everything absorbed so far and returns to the fresh state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of bytes absorbed since the context was created or last reset.
    pub fn len(&self) -> u128 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Absorbs `data` after everything fed so far.
    ///
    /// An empty slice is a no-op.
    ///
    /// # Errors
    /// Returns [`Error::MessageTooLong`] when the session would exceed
    /// [`MAX_MESSAGE_LEN`] bytes. The context is left exactly as it was
    /// before the call.
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> Result<()> {
        let data = data.as_ref();
        if data.is_empty() {
            return Ok(());
        }

        let within_limit = self
            .len
            .checked_add(data.len() as u128)
            .is_some_and(|total| total <= MAX_MESSAGE_LEN);

        if !within_limit {
            warn!(
                absorbed = %self.len,
                attempted = data.len(),
                "rejecting SHA-384 update past the message length limit"
            );
            return Err(Error::MessageTooLong {
                absorbed: self.len,
                attempted: data.len(),
            });
        }

        self.absorb(data);
        Ok(())
    }

    /// Builder-style [`Sha384::update`].
    pub fn chain_update(mut self, data: impl AsRef<[u8]>) -> Result<Self> {
        self.update(data)?;
        Ok(self)
    }

    /// Pads the message, returns its digest and resets the context.
    pub fn sum(&mut self) -> [u8; DIGEST_LEN] {
        let digest = self.finalize_state();
        self.reset();
        digest
    }

    /// Consuming variant of [`Sha384::sum`].
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        self.finalize_state()
    }

    /// Buffers `data` and compresses every block it completes.
    ///
    /// Callers must have checked the length limit.
    fn absorb(&mut self, mut data: &[u8]) {
        self.len += data.len() as u128;

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }

            compress(&self.buffer, &mut self.state);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            all_rounds(&mut self.state, load_words(block));
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Appends the padding, compresses the final one or two blocks and
    /// serializes the first six state words.
    ///
    /// Leaves the context in a spent state; callers reset or drop it.
    fn finalize_state(&mut self) -> [u8; DIGEST_LEN] {
        let rem = self.buffered;
        let bit_len = self.len << 3;

        // Append the padding bit (0x80) and clear the rest of the block
        self.buffer[rem] = 0x80;
        self.buffer[rem + 1..].fill(0);

        // No room left for the 128-bit length field: flush this block
        // and put the length into an additional zeroed one.
        let padding_blocks = if rem >= BLOCK_LEN - 16 {
            compress(&self.buffer, &mut self.state);
            self.buffer.fill(0);
            2
        } else {
            1
        };

        self.buffer[BLOCK_LEN - 16..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&self.buffer, &mut self.state);

        trace!(bytes = %self.len, padding_blocks, "finalized SHA-384 digest");

        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(8).zip(&self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        out
    }
}

impl Default for Sha384 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha384 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha384")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// Absorbs every byte written; `flush` has nothing to do.
impl io::Write for Sha384 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Computes the SHA-384 hash of the given input.
///
/// Equivalent to a fresh [`Sha384`], a single update with `input`, and
/// [`Sha384::sum`].
pub fn sha384(input: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha384::new();

    // A slice never comes near MAX_MESSAGE_LEN.
    hasher.absorb(input);

    hasher.sum()
}
