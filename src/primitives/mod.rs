//! Primitive adapter.
//!
//! The constructions in this crate are built on four primitives that are
//! consumed, not implemented, here:
//!
//! - Salsa20 / HSalsa20 (`salsa20` crate), internal to the crate;
//! - Poly1305 (`poly1305` crate), exposed as [`onetimeauth`];
//! - X25519 (`x25519-dalek`), exposed as [`scalarmult`];
//! - Ed25519 (`ed25519-dalek`), wrapped by the `sign` module.
//!
//! Each submodule narrows its backend to the handful of fixed-size
//! functions the constructions call, so the backends can be swapped
//! without touching `secretbox` or `box_`.

pub(crate) mod salsa;

/// Poly1305 one-time authenticator (`crypto_onetimeauth`).
pub mod onetimeauth;

/// X25519 scalar multiplication (`crypto_scalarmult`).
pub mod scalarmult;
