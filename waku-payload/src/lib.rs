//! Waku v2 message payloads: the version 0 (plaintext) and version 1 (encrypted) envelopes,
//! and the registry of keys used to open them.

pub use decryption_keys::*;
pub use envelope::*;

mod decryption_keys;
mod envelope;
pub mod version_1;
