//! Public-key authenticated encryption (`crypto_box`).
//!
//! Box lets two parties holding X25519 key pairs exchange authenticated,
//! encrypted messages without a pre-shared key. It derives a shared key by
//! Diffie-Hellman agreement and then delegates to
//! [`secretbox`](crate::secretbox).
//!
//! The module is named `box_` because `box` is a reserved word in Rust.

mod core;

pub use self::core::{
    KeyPair, OVERHEAD, easy_open, easy_seal, generate_keypair, open, open_after_precomputation,
    precompute, seal, seal_after_precomputation,
};
