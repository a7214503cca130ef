//! Random number generation.
//!
//! Keys, nonces and signing seeds are drawn from the operating system
//! CSPRNG. The crate never expands randomness itself: every call goes
//! straight to `OsRng`, so there is no generator state to protect or reseed.

use rand::RngCore;
use rand::rngs::OsRng;

/// Returns a fresh array of cryptographically secure random bytes.
///
/// # Panics
///
/// Panics if the operating system entropy source fails. Such a failure is
/// considered unrecoverable in a cryptographic context.
pub(crate) fn random_array<const N: usize>() -> [u8; N] {
    let mut out = [0u8; N];
    OsRng.fill_bytes(&mut out);
    out
}
