//! Secretbox with a random, prepended nonce.
//!
//! The output layout is `nonce (24) || tag (16) || ciphertext`. Random
//! 24-byte nonces make accidental reuse negligible, so callers do not need
//! to track nonce state.

use crate::error::{Error, Result};
use crate::keys::{Key, NONCE_SIZE, Nonce};

use super::core::{OVERHEAD, open, seal_into};

/// Seals `message` under a freshly generated random nonce.
///
/// The nonce is prepended to the sealed box.
pub fn easy_seal(message: &[u8], key: &Key) -> Vec<u8> {
    let nonce = Nonce::generate();

    let mut out = Vec::with_capacity(NONCE_SIZE + OVERHEAD + message.len());
    out.extend_from_slice(nonce.as_bytes());
    seal_into(&mut out, message, &nonce, key);
    out
}

/// Opens a box produced by [`easy_seal`].
///
/// # Errors
///
/// - [`Error::TooShort`] if the input cannot hold a nonce and a tag.
/// - [`Error::Unauthenticated`] if the tag does not verify.
pub fn easy_open(sealed: &[u8], key: &Key) -> Result<Vec<u8>> {
    if sealed.len() < NONCE_SIZE + OVERHEAD {
        tracing::debug!(len = sealed.len(), "secretbox: easy box shorter than nonce and tag");
        return Err(Error::TooShort {
            minimum: NONCE_SIZE + OVERHEAD,
            actual: sealed.len(),
        });
    }

    let (nonce, sealed) = sealed.split_at(NONCE_SIZE);
    open(sealed, &Nonce::from_slice(nonce)?, key)
}
