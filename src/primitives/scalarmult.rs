//! X25519 scalar multiplication.
//!
//! Thin adapter over `x25519-dalek`. Scalars are clamped as specified by
//! RFC 7748 before multiplication. Peer points are not validated and the
//! result may be all zeros for low-order inputs, matching NaCl
//! `crypto_scalarmult`.

use x25519_dalek::{X25519_BASEPOINT_BYTES, x25519};

use crate::keys::Key;

/// Multiplies the curve point `point` by `scalar`.
pub fn scalar_mult(scalar: &Key, point: &Key) -> Key {
    Key::from_bytes(x25519(*scalar.as_bytes(), *point.as_bytes()))
}

/// Multiplies the standard base point by `scalar`.
///
/// Given an X25519 private key, this returns the matching public key.
pub fn scalar_base_mult(scalar: &Key) -> Key {
    Key::from_bytes(x25519(*scalar.as_bytes(), X25519_BASEPOINT_BYTES))
}
