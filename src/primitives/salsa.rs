//! XSalsa20 building blocks.
//!
//! The secretbox construction drives the Salsa20 stream cipher directly
//! rather than through an XSalsa20 wrapper, because it needs to split the
//! first keystream block between the authenticator key and the message.
//! This module exposes the two pieces it needs:
//!
//! - [`hsalsa20`]: derives a Salsa20 sub-key from a 32-byte key and 16
//!   bytes of nonce;
//! - [`xor_keystream`]: XORs input with the Salsa20 keystream starting at
//!   an explicit block index.

use salsa20::cipher::consts::U10;
use salsa20::cipher::generic_array::GenericArray;
use salsa20::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
use salsa20::{Salsa20, hsalsa};

/// Size of one Salsa20 keystream block.
pub(crate) const BLOCK_SIZE: usize = 64;

/// Salsa20 input block position.
///
/// Serialized as the 8-byte stream nonce followed by the 64-bit block
/// index in little-endian order. Block 0 is reserved for the one-time
/// authenticator key; message encryption continues at block 1.
#[derive(Clone, Copy)]
pub(crate) struct Counter {
    nonce: [u8; 8],
    block: u64,
}

impl Counter {
    /// Creates a counter positioned at block 0.
    pub(crate) fn new(nonce: [u8; 8]) -> Self {
        Self { nonce, block: 0 }
    }

    /// Moves the counter to an absolute block index.
    pub(crate) fn set_block(&mut self, block: u64) {
        self.block = block;
    }

    /// Returns the 16-byte serialized form.
    #[cfg(test)]
    pub(crate) fn to_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[..8].copy_from_slice(&self.nonce);
        out[8..].copy_from_slice(&self.block.to_le_bytes());
        out
    }
}

/// The HSalsa20 function (20 rounds).
///
/// Maps a 32-byte key and a 16-byte input to a 32-byte output suitable as a
/// Salsa20 key. Used both for the XSalsa20 sub-key and for hashing the raw
/// X25519 shared point into a box key.
pub(crate) fn hsalsa20(key: &[u8; 32], input: &[u8; 16]) -> [u8; 32] {
    let derived = hsalsa::<U10>(GenericArray::from_slice(key), GenericArray::from_slice(input));

    let mut out = [0u8; 32];
    out.copy_from_slice(&derived);
    out
}

/// XORs `src` with the Salsa20 keystream and writes the result to `dst`.
///
/// The keystream starts at the block index held by `counter`. Encryption
/// and decryption are the same operation.
///
/// # Panics
///
/// Panics if `dst` and `src` have different lengths. Callers inside the
/// crate always size both from the same message.
pub(crate) fn xor_keystream(dst: &mut [u8], src: &[u8], counter: &Counter, key: &[u8; 32]) {
    assert_eq!(dst.len(), src.len());

    if src.is_empty() {
        return;
    }

    let mut cipher = Salsa20::new(
        GenericArray::from_slice(key),
        GenericArray::from_slice(&counter.nonce),
    );
    cipher.seek(counter.block * BLOCK_SIZE as u64);

    dst.copy_from_slice(src);
    cipher.apply_keystream(dst);
}
