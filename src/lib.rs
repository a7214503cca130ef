//! NaCl authenticated-encryption and signature constructions.
//!
//! This crate implements the construction layer of the NaCl toolkit on top
//! of externally provided primitives (Salsa20, Poly1305, X25519, Ed25519).
//! Its output is byte-compatible with NaCl and libsodium.
//!
//! The focus is on **getting the constructions exactly right**: byte
//! offsets, key derivation order and authenticate-then-decrypt ordering are
//! where such code silently breaks, and they are implemented here once,
//! explicitly, and covered by known-answer tests.
//!
//! # Module overview
//!
//! - `keys`
//!   Fixed-size [`Key`] and [`Nonce`] types. Raw input is length-checked
//!   once at construction; every other function relies on the types.
//!
//! - `secretbox`
//!   XSalsa20-Poly1305 secret-key authenticated encryption
//!   (`crypto_secretbox`).
//!
//! - `box_`
//!   X25519 key agreement followed by `secretbox` (`crypto_box`),
//!   including precomputation of the shared key for repeated messages to
//!   the same peer.
//!
//! - `sign`
//!   Ed25519 signatures with NaCl key and signed-message layouts
//!   (`crypto_sign`).
//!
//! - `auth`
//!   HMAC-SHA-512-256 message authentication (`crypto_auth`).
//!
//! - `primitives`
//!   Thin adapters over the primitive implementations. `onetimeauth` and
//!   `scalarmult` are public building blocks; the Salsa20 adapter is
//!   internal.
//!
//! # Design goals
//!
//! - Stateless, deterministic operations; no global state
//! - Role-typed keys and nonces instead of raw buffers
//! - All failures returned as [`Error`] values, never panics on caller input
//! - Derived key material wiped before returning
//!
//! # Caller obligations
//!
//! The crate cannot detect nonce reuse. A `(key, nonce)` pair must never
//! seal two different messages. Message lengths are not hidden.

mod error;
mod rng;

pub mod auth;
pub mod encryption;
pub mod keys;
pub mod primitives;
pub mod signatures;

pub use encryption::{box_, secretbox};
pub use error::{Error, Result};
pub use keys::{Key, Nonce};
pub use signatures::ed25519 as sign;
