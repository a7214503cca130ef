//! Digital signature schemes.
//!
//! At present this module holds a single scheme, Ed25519, exposed with the
//! key and message layouts of NaCl `crypto_sign`. It is re-exported at the
//! crate root as `sign`.

pub mod ed25519;
