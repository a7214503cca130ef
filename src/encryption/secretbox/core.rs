//! XSalsa20-Poly1305 secret-key authenticated encryption.
//!
//! A sealed box is laid out as:
//!
//! ```text
//! tag (16 bytes) || ciphertext (len(message) bytes)
//! ```
//!
//! ## Key schedule (per call)
//!
//! 1. `subkey = HSalsa20(key, nonce[0..16])`
//! 2. `block0 = Salsa20(subkey, nonce[16..24], block = 0)`
//! 3. `block0[0..32]` is the one-time Poly1305 key,
//!    `block0[32..64]` encrypts the first 32 message bytes
//! 4. the rest of the message is encrypted from block 1 onward
//!
//! The output is byte-for-byte compatible with NaCl `crypto_secretbox`.
//!
//! ## Notes
//!
//! - All derived material is wiped before returning.
//! - Opening authenticates first and only decrypts a box whose tag
//!   verified.
//! - The caller must never seal two messages with the same `(key, nonce)`.

use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::keys::{Key, Nonce};
use crate::primitives::onetimeauth;
use crate::primitives::salsa::{self, BLOCK_SIZE, Counter};

/// Number of bytes a sealed box is longer than its message.
pub const OVERHEAD: usize = onetimeauth::SIZE;

/// Message bytes encrypted with the tail of keystream block 0.
const HEAD_SIZE: usize = BLOCK_SIZE - onetimeauth::KEY_SIZE;

/// Per-message keys derived from `(key, nonce)`.
///
/// Block 0 of the keystream is generated once and split between the
/// authenticator key and the head of the message keystream.
struct MessageKeys {
    sub_key: Zeroizing<[u8; 32]>,
    counter: Counter,
    auth_key: Zeroizing<[u8; onetimeauth::KEY_SIZE]>,
    head_stream: Zeroizing<[u8; HEAD_SIZE]>,
}

impl MessageKeys {
    fn derive(nonce: &Nonce, key: &Key) -> Self {
        let sub_key = Zeroizing::new(salsa::hsalsa20(key.as_bytes(), &nonce.hsalsa_input()));
        let counter = Counter::new(nonce.stream_nonce());

        let mut block0 = Zeroizing::new([0u8; BLOCK_SIZE]);
        salsa::xor_keystream(&mut block0[..], &[0u8; BLOCK_SIZE], &counter, &sub_key);

        let mut auth_key = Zeroizing::new([0u8; onetimeauth::KEY_SIZE]);
        auth_key.copy_from_slice(&block0[..onetimeauth::KEY_SIZE]);

        let mut head_stream = Zeroizing::new([0u8; HEAD_SIZE]);
        head_stream.copy_from_slice(&block0[onetimeauth::KEY_SIZE..]);

        Self {
            sub_key,
            counter,
            auth_key,
            head_stream,
        }
    }

    /// Applies the message keystream to `src`, writing into `dst`.
    ///
    /// The first [`HEAD_SIZE`] bytes use the tail of block 0; the remainder
    /// is streamed from block 1.
    fn apply(&self, dst: &mut [u8], src: &[u8]) {
        let head = src.len().min(HEAD_SIZE);

        for ((d, s), k) in dst[..head].iter_mut().zip(&src[..head]).zip(self.head_stream.iter()) {
            *d = s ^ k;
        }

        let mut counter = self.counter;
        counter.set_block(1);
        salsa::xor_keystream(&mut dst[head..], &src[head..], &counter, &self.sub_key);
    }
}

/// Encrypts and authenticates `message`, appending the sealed box to `out`.
///
/// Existing content of `out` is preserved. Spare capacity is reused, so
/// sealing into a vector created with enough capacity does not allocate.
/// `out` grows by exactly `message.len() + OVERHEAD` bytes.
///
/// The `(key, nonce)` pair must be unique for every distinct message.
pub fn seal_into(out: &mut Vec<u8>, message: &[u8], nonce: &Nonce, key: &Key) {
    let keys = MessageKeys::derive(nonce, key);

    let start = out.len();
    out.resize(start + OVERHEAD + message.len(), 0);

    let (tag_out, ciphertext) = out[start..].split_at_mut(OVERHEAD);
    keys.apply(ciphertext, message);

    let tag = onetimeauth::sum(ciphertext, &keys.auth_key);
    tag_out.copy_from_slice(&tag);
}

/// Encrypts and authenticates `message` into a new vector.
///
/// The result is `OVERHEAD` bytes longer than `message`.
pub fn seal(message: &[u8], nonce: &Nonce, key: &Key) -> Vec<u8> {
    let mut out = Vec::with_capacity(message.len() + OVERHEAD);
    seal_into(&mut out, message, nonce, key);
    out
}

/// Authenticates and decrypts `sealed`, appending the message to `out`.
///
/// On success `out` grows by `sealed.len() - OVERHEAD` bytes. On failure
/// `out` is left untouched and no plaintext is produced.
///
/// # Errors
///
/// - [`Error::TooShort`] if `sealed` cannot even hold a tag.
/// - [`Error::Unauthenticated`] if the tag does not verify. No further
///   detail is given.
pub fn open_into(out: &mut Vec<u8>, sealed: &[u8], nonce: &Nonce, key: &Key) -> Result<()> {
    if sealed.len() < OVERHEAD {
        tracing::debug!(len = sealed.len(), "secretbox: sealed box shorter than tag");
        return Err(Error::TooShort {
            minimum: OVERHEAD,
            actual: sealed.len(),
        });
    }

    let keys = MessageKeys::derive(nonce, key);

    let (tag, ciphertext) = sealed.split_at(OVERHEAD);
    let mut claimed = [0u8; OVERHEAD];
    claimed.copy_from_slice(tag);

    if !onetimeauth::verify(&claimed, ciphertext, &keys.auth_key) {
        tracing::debug!(len = sealed.len(), "secretbox: authentication failed");
        return Err(Error::Unauthenticated);
    }

    let start = out.len();
    out.resize(start + ciphertext.len(), 0);
    keys.apply(&mut out[start..], ciphertext);

    Ok(())
}

/// Authenticates and decrypts `sealed` into a new vector.
///
/// See [`open_into`] for the failure modes.
pub fn open(sealed: &[u8], nonce: &Nonce, key: &Key) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(sealed.len().saturating_sub(OVERHEAD));
    open_into(&mut out, sealed, nonce, key)?;
    Ok(out)
}
