//! Authenticated encryption constructions.
//!
//! - [`secretbox`]: XSalsa20-Poly1305 under a shared 32-byte key.
//! - [`box_`]: X25519 key agreement followed by `secretbox`.
//!
//! Both constructions are deterministic given their inputs, hold no state
//! between calls, and produce output interoperable with NaCl.

pub mod box_;
pub mod secretbox;
