//! Secret-key message authentication (`crypto_auth`).
//!
//! Authenticates a message with HMAC-SHA-512 truncated to 256 bits, as in
//! NaCl. Unlike the one-time authenticator, a key may be reused across any
//! number of messages.
//!
//! The tag does not hide the message; combine with `secretbox` when
//! confidentiality is needed.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::keys::Key;

type HmacSha512 = Hmac<Sha512>;

/// Size in bytes of an authentication tag.
pub const SIZE: usize = 32;

fn keyed(key: &Key, message: &[u8]) -> HmacSha512 {
    let mut mac = HmacSha512::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message);
    mac
}

/// Computes the authentication tag of `message` under `key`.
pub fn sum(message: &[u8], key: &Key) -> [u8; SIZE] {
    let digest = keyed(key, message).finalize().into_bytes();

    let mut tag = [0u8; SIZE];
    tag.copy_from_slice(&digest[..SIZE]);
    tag
}

/// Checks that `tag` authenticates `message` under `key`.
///
/// The comparison runs in constant time.
pub fn verify(tag: &[u8; SIZE], message: &[u8], key: &Key) -> bool {
    let valid = keyed(key, message).verify_truncated_left(tag).is_ok();
    if !valid {
        tracing::debug!(len = message.len(), "auth: tag mismatch");
    }
    valid
}
