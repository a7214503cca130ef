//! Curve25519-XSalsa20-Poly1305 public-key authenticated encryption.
//!
//! A box between two parties is a secretbox keyed with a shared key that
//! both sides can compute from their own private key and the peer's
//! public key:
//!
//! ```text
//! shared = HSalsa20(X25519(private, peer_public), 0^16)
//! ```
//!
//! The scalar multiplication dominates the cost of a box, so the shared
//! key can be computed once with [`precompute`] and reused through
//! [`seal_after_precomputation`] / [`open_after_precomputation`] for every
//! message exchanged with the same peer.
//!
//! The output is byte-for-byte compatible with NaCl `crypto_box`.

use crate::encryption::secretbox;
use crate::error::{Error, Result};
use crate::keys::{Key, NONCE_SIZE, Nonce};
use crate::primitives::salsa;
use crate::primitives::scalarmult::{scalar_base_mult, scalar_mult};

/// Number of bytes a box is longer than its message.
pub const OVERHEAD: usize = secretbox::OVERHEAD;

/// An X25519 key pair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// Public key, safe to share with peers.
    pub public_key: Key,

    /// Private key. Never leaves the owner.
    pub private_key: Key,
}

impl KeyPair {
    /// Rebuilds a key pair from its private half.
    pub fn from_private_key(private_key: Key) -> Self {
        let public_key = scalar_base_mult(&private_key);

        Self {
            public_key,
            private_key,
        }
    }
}

/// Generates a fresh key pair from the operating system CSPRNG.
pub fn generate_keypair() -> KeyPair {
    KeyPair::from_private_key(Key::generate())
}

/// Computes the shared key between `private_key` and `peer_public_key`.
///
/// Both parties obtain the same key: `precompute(pk_b, sk_a) ==
/// precompute(pk_a, sk_b)`. The result is immutable and may be cached and
/// shared between threads.
pub fn precompute(peer_public_key: &Key, private_key: &Key) -> Key {
    let point = scalar_mult(private_key, peer_public_key);
    Key::from_bytes(salsa::hsalsa20(point.as_bytes(), &[0u8; 16]))
}

/// Encrypts and authenticates `message` for `peer_public_key`.
pub fn seal(message: &[u8], nonce: &Nonce, peer_public_key: &Key, private_key: &Key) -> Vec<u8> {
    let shared = precompute(peer_public_key, private_key);
    seal_after_precomputation(message, nonce, &shared)
}

/// Authenticates and decrypts a box sent by `peer_public_key`.
///
/// # Errors
///
/// Same as [`secretbox::open`].
pub fn open(sealed: &[u8], nonce: &Nonce, peer_public_key: &Key, private_key: &Key) -> Result<Vec<u8>> {
    // Rejected before the scalar multiplication.
    if sealed.len() < OVERHEAD {
        tracing::debug!(len = sealed.len(), "box: sealed box shorter than tag");
        return Err(Error::TooShort {
            minimum: OVERHEAD,
            actual: sealed.len(),
        });
    }

    let shared = precompute(peer_public_key, private_key);
    open_after_precomputation(sealed, nonce, &shared)
}

/// Same as [`seal`], using a key returned by [`precompute`].
pub fn seal_after_precomputation(message: &[u8], nonce: &Nonce, shared_key: &Key) -> Vec<u8> {
    secretbox::seal(message, nonce, shared_key)
}

/// Same as [`open`], using a key returned by [`precompute`].
pub fn open_after_precomputation(sealed: &[u8], nonce: &Nonce, shared_key: &Key) -> Result<Vec<u8>> {
    secretbox::open(sealed, nonce, shared_key)
}

/// Seals `message` for `peer_public_key` under a random prepended nonce.
///
/// The output layout is `nonce (24) || tag (16) || ciphertext`.
pub fn easy_seal(message: &[u8], peer_public_key: &Key, private_key: &Key) -> Vec<u8> {
    let shared = precompute(peer_public_key, private_key);
    secretbox::easy_seal(message, &shared)
}

/// Opens a box produced by [`easy_seal`].
///
/// # Errors
///
/// Same as [`secretbox::easy_open`].
pub fn easy_open(sealed: &[u8], peer_public_key: &Key, private_key: &Key) -> Result<Vec<u8>> {
    if sealed.len() < NONCE_SIZE + OVERHEAD {
        tracing::debug!(len = sealed.len(), "box: easy box shorter than nonce and tag");
        return Err(Error::TooShort {
            minimum: NONCE_SIZE + OVERHEAD,
            actual: sealed.len(),
        });
    }

    let shared = precompute(peer_public_key, private_key);
    secretbox::easy_open(sealed, &shared)
}
