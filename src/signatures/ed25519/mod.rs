//! Ed25519 signature wrapper.
//!
//! The public API lives in `core` and is re-exported here. The curve
//! arithmetic is provided by `ed25519-dalek`; nothing in this module
//! implements Ed25519 itself.

mod core;

pub use self::core::{
    PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, PrivateKey, PublicKey, SEED_SIZE, SIGNATURE_SIZE, Signature,
    generate_keypair, open, sign, sign_detached, verify, verify_detached,
};
