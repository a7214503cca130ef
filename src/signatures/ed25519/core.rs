//! Ed25519 signatures with NaCl key conventions.
//!
//! Key and message formats follow NaCl `crypto_sign`:
//!
//! - public key: 32-byte compressed Edwards point;
//! - private key: 64 bytes, `seed || public key`;
//! - signed message: `signature (64) || message`.
//!
//! All curve arithmetic is delegated to `ed25519-dalek`. This module only
//! adapts key and message layouts.

use std::fmt;

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};

use crate::error::{Error, Result};
use crate::keys::checked_array;
use crate::rng::random_array;

/// Size in bytes of a public key.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size in bytes of a private key (`seed || public key`).
pub const PRIVATE_KEY_SIZE: usize = 64;

/// Size in bytes of a signature.
pub const SIGNATURE_SIZE: usize = 64;

/// Size in bytes of the seed a private key is derived from.
pub const SEED_SIZE: usize = 32;

/// An Ed25519 public key.
///
/// Only the length is checked at construction. Whether the bytes encode a
/// valid curve point is checked during verification, where an invalid
/// point simply fails to verify.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Wraps a 32-byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Builds a public key from a byte slice of exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        checked_array(bytes).map(Self)
    }

    /// Returns the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    fn verifying_key(&self) -> Option<VerifyingKey> {
        VerifyingKey::from_bytes(&self.0).ok()
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.0))
    }
}

/// An Ed25519 private key.
///
/// Stored as an expanded signing key; the secret is wiped when the value
/// is dropped.
#[derive(Clone)]
pub struct PrivateKey(SigningKey);

impl PrivateKey {
    /// Derives a private key from a 32-byte seed.
    pub fn from_seed(seed: &[u8; SEED_SIZE]) -> Self {
        Self(SigningKey::from_bytes(seed))
    }

    /// Builds a private key from its 64-byte `seed || public key` form.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLength`] if `bytes` is not 64 bytes long.
    /// - [`Error::InvalidKey`] if the public half does not belong to the
    ///   seed.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let keypair: [u8; PRIVATE_KEY_SIZE] = checked_array(bytes)?;

        SigningKey::from_keypair_bytes(&keypair).map(Self).map_err(|_| {
            tracing::debug!("sign: private key does not match its public half");
            Error::InvalidKey
        })
    }

    /// Returns the 64-byte `seed || public key` form.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_SIZE] {
        self.0.to_keypair_bytes()
    }

    /// Returns the public key matching this private key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.verifying_key().to_bytes())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&self.public_key()).finish()
    }
}

/// A detached Ed25519 signature.
///
/// No validation is performed at construction time. Structural and
/// cryptographic validity is checked during verification.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_SIZE]);

impl Signature {
    /// Wraps a 64-byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Builds a signature from a byte slice of exactly 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        checked_array(bytes).map(Self)
    }

    /// Returns the raw signature bytes (`R || S`).
    #[inline]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(self.0))
    }
}

/// Generates a fresh key pair from a random seed.
pub fn generate_keypair() -> (PublicKey, PrivateKey) {
    let seed = zeroize::Zeroizing::new(random_array::<SEED_SIZE>());
    let private = PrivateKey::from_seed(&seed);

    (private.public_key(), private)
}

/// Computes a detached signature over `message`.
///
/// Ed25519 signing is deterministic: the same key and message always
/// produce the same signature.
pub fn sign_detached(message: &[u8], private_key: &PrivateKey) -> Signature {
    Signature(private_key.0.sign(message).to_bytes())
}

/// Checks a detached signature.
///
/// Returns `false` for an invalid signature and for a public key that does
/// not decode to a curve point.
pub fn verify_detached(signature: &Signature, message: &[u8], public_key: &PublicKey) -> bool {
    let Some(verifying_key) = public_key.verifying_key() else {
        tracing::debug!("sign: public key is not a valid curve point");
        return false;
    };

    let signature = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key.verify(message, &signature).is_ok()
}

/// Signs `message`, returning `signature || message`.
pub fn sign(message: &[u8], private_key: &PrivateKey) -> Vec<u8> {
    let signature = sign_detached(message, private_key);

    let mut signed = Vec::with_capacity(SIGNATURE_SIZE + message.len());
    signed.extend_from_slice(&signature.0);
    signed.extend_from_slice(message);
    signed
}

/// Verifies a signed message and returns the message it carries.
///
/// No part of the message is returned unless the signature is valid.
///
/// # Errors
///
/// - [`Error::TooShort`] if `signed` cannot hold a signature.
/// - [`Error::Unauthenticated`] on any verification failure.
pub fn open(signed: &[u8], public_key: &PublicKey) -> Result<Vec<u8>> {
    if signed.len() < SIGNATURE_SIZE {
        tracing::debug!(len = signed.len(), "sign: signed message shorter than signature");
        return Err(Error::TooShort {
            minimum: SIGNATURE_SIZE,
            actual: signed.len(),
        });
    }

    let (signature, message) = signed.split_at(SIGNATURE_SIZE);
    let signature = Signature::from_slice(signature)?;

    if !verify_detached(&signature, message, public_key) {
        tracing::debug!(len = signed.len(), "sign: signature verification failed");
        return Err(Error::Unauthenticated);
    }

    Ok(message.to_vec())
}

/// Returns whether `signed` carries a valid signature by `public_key`.
pub fn verify(signed: &[u8], public_key: &PublicKey) -> bool {
    open(signed, public_key).is_ok()
}
