//! Secret-key authenticated encryption (`crypto_secretbox`).
//!
//! Secretbox combines XSalsa20 for confidentiality with Poly1305 for
//! authenticity. Message lengths are not hidden.
//!
//! ## Structure
//!
//! - `core`
//!   The construction itself: per-message key schedule, [`seal`] /
//!   [`open`] and their appending variants [`seal_into`] /
//!   [`open_into`].
//!
//! - `easy`
//!   [`easy_seal`] / [`easy_open`], which generate a random nonce and
//!   carry it in front of the box.
//!
//! ## Nonces
//!
//! It is the caller's responsibility to never reuse a nonce with the same
//! key, for example by using a counter or by drawing nonces at random with
//! [`Nonce::generate`](crate::keys::Nonce::generate).

mod core;
mod easy;

pub use self::core::{OVERHEAD, open, open_into, seal, seal_into};
pub use self::easy::{easy_open, easy_seal};
