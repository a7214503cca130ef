//! Fixed-size key and nonce types.
//!
//! These wrappers give the raw byte arrays consumed by the constructions a
//! named role, so a nonce can never be passed where a key is expected. The
//! fallible constructors are the only place where input sizes are checked;
//! everything downstream relies on the type to guarantee the shape.

use std::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};
use crate::rng::random_array;

/// Size in bytes of a [`Key`].
pub const KEY_SIZE: usize = 32;

/// Size in bytes of a [`Nonce`].
pub const NONCE_SIZE: usize = 24;

/// Length of the nonce prefix fed to HSalsa20 during sub-key derivation.
const HSALSA_INPUT_SIZE: usize = 16;

/// Converts a slice into a fixed-size array, rejecting any other length.
///
/// Input is never truncated or padded.
pub(crate) fn checked_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    if bytes.len() != N {
        tracing::debug!(expected = N, actual = bytes.len(), "rejected input of wrong length");
        return Err(Error::InvalidLength {
            expected: N,
            actual: bytes.len(),
        });
    }

    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// A 32-byte key.
///
/// Depending on the construction, a `Key` is a symmetric secretbox key, an
/// X25519 private scalar, an X25519 public point, or a precomputed box
/// shared key.
///
/// # Security
///
/// - The bytes are wiped from memory when the key is dropped.
/// - Equality is evaluated in constant time.
/// - `Debug` output never contains the key bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_SIZE]);

impl Key {
    /// Wraps a 32-byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Builds a key from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if `bytes` is not exactly
    /// [`KEY_SIZE`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        checked_array(bytes).map(Self)
    }

    /// Decodes a key from its hexadecimal representation.
    ///
    /// Surrounding whitespace is ignored, which allows keys to be read
    /// directly from files with a trailing newline.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let decoded = Zeroizing::new(hex::decode(encoded.trim())?);
        Self::from_slice(&decoded)
    }

    /// Generates a fresh random key from the operating system CSPRNG.
    pub fn generate() -> Self {
        Self(random_array())
    }

    /// Returns the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Key {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for Key {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(..)")
    }
}

/// A 24-byte per-message nonce.
///
/// Nonces are not secret, but a `(key, nonce)` pair must never be used to
/// seal two different messages. The crate cannot detect reuse; keeping
/// nonces unique is the caller's responsibility. Random nonces from
/// [`Nonce::generate`] are long enough that collisions are negligible.
///
/// Internally the nonce is split in two:
///
/// - bytes `0..16` feed the HSalsa20 sub-key derivation,
/// - bytes `16..24` become the Salsa20 stream nonce.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Wraps a 24-byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Builds a nonce from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if `bytes` is not exactly
    /// [`NONCE_SIZE`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        checked_array(bytes).map(Self)
    }

    /// Decodes a nonce from its hexadecimal representation.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(encoded.trim())?)
    }

    /// Generates a random nonce from the operating system CSPRNG.
    pub fn generate() -> Self {
        Self(random_array())
    }

    /// Returns the raw nonce bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }

    /// The first 16 bytes, used as HSalsa20 input.
    pub(crate) fn hsalsa_input(&self) -> [u8; HSALSA_INPUT_SIZE] {
        let mut out = [0u8; HSALSA_INPUT_SIZE];
        out.copy_from_slice(&self.0[..HSALSA_INPUT_SIZE]);
        out
    }

    /// The last 8 bytes, used as the Salsa20 stream nonce.
    pub(crate) fn stream_nonce(&self) -> [u8; NONCE_SIZE - HSALSA_INPUT_SIZE] {
        let mut out = [0u8; NONCE_SIZE - HSALSA_INPUT_SIZE];
        out.copy_from_slice(&self.0[HSALSA_INPUT_SIZE..]);
        out
    }
}

impl From<[u8; NONCE_SIZE]> for Nonce {
    fn from(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({})", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonce_halves_cover_all_bytes() {
        let mut bytes = [0u8; NONCE_SIZE];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let nonce = Nonce::from_bytes(bytes);

        assert_eq!(nonce.hsalsa_input()[..], bytes[..16]);
        assert_eq!(nonce.stream_nonce()[..], bytes[16..]);
    }

    #[test]
    fn checked_array_rejects_short_and_long_input() {
        assert_eq!(
            checked_array::<4>(&[1, 2, 3]),
            Err(Error::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
        assert!(checked_array::<4>(&[1, 2, 3, 4, 5]).is_err());
        assert_eq!(checked_array::<4>(&[1, 2, 3, 4]), Ok([1, 2, 3, 4]));
    }
}
