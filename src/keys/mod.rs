//! Key material shared by the constructions.
//!
//! This module defines the fixed-size, role-typed byte arrays consumed by
//! `secretbox`, `box_` and `auth`:
//!
//! - [`Key`]: 32 bytes, secret or public depending on the construction,
//!   wiped on drop and compared in constant time;
//! - [`Nonce`]: 24 bytes, unique per message under a given key.
//!
//! Constructors from raw bytes validate the length and fail fast, so no
//! downstream function re-checks shapes.
//!
//! Signature keys have their own types in the `sign` module, since their
//! sizes and encodings are defined by Ed25519.

mod core;

pub use self::core::{KEY_SIZE, Key, NONCE_SIZE, Nonce};

pub(crate) use self::core::checked_array;
