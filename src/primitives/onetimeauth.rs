//! Poly1305 one-time authenticator.
//!
//! A one-time authenticator is only secure when each key authenticates a
//! single message. The constructions in this crate derive a fresh key from
//! the first keystream block of every sealed message; callers using this
//! module directly must uphold the same rule.

use poly1305::Poly1305;
use poly1305::universal_hash::KeyInit;
use poly1305::universal_hash::generic_array::GenericArray;
use subtle::ConstantTimeEq;

/// Size in bytes of an authentication tag.
pub const SIZE: usize = 16;

/// Size in bytes of a one-time authenticator key.
pub const KEY_SIZE: usize = 32;

/// Computes the Poly1305 tag of `message` under a one-time `key`.
///
/// The message is processed without padding, matching NaCl
/// `crypto_onetimeauth`.
pub fn sum(message: &[u8], key: &[u8; KEY_SIZE]) -> [u8; SIZE] {
    let tag = Poly1305::new(GenericArray::from_slice(key)).compute_unpadded(message);

    let mut out = [0u8; SIZE];
    out.copy_from_slice(&tag);
    out
}

/// Checks that `tag` authenticates `message` under `key`.
///
/// The comparison runs in constant time with respect to the tag contents.
pub fn verify(tag: &[u8; SIZE], message: &[u8], key: &[u8; KEY_SIZE]) -> bool {
    let expected = sum(message, key);
    expected[..].ct_eq(&tag[..]).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8439, section 2.5.2.
    const RFC_KEY: &str = "85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b";
    const RFC_MESSAGE: &[u8] = b"Cryptographic Forum Research Group";
    const RFC_TAG: &str = "a8061dc1305136c6c22b8baf0c0127a9";

    fn rfc_key() -> [u8; KEY_SIZE] {
        let mut key = [0u8; KEY_SIZE];
        hex::decode_to_slice(RFC_KEY, &mut key).unwrap();
        key
    }

    #[test]
    fn sum_matches_rfc8439_vector() {
        assert_eq!(hex::encode(sum(RFC_MESSAGE, &rfc_key())), RFC_TAG);
    }

    #[test]
    fn verify_accepts_valid_and_rejects_modified_tag() {
        let key = rfc_key();
        let mut tag = sum(RFC_MESSAGE, &key);
        assert!(verify(&tag, RFC_MESSAGE, &key));

        tag[15] ^= 0x80;
        assert!(!verify(&tag, RFC_MESSAGE, &key));
    }
}
