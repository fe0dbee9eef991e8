use byte_unit::MEBIBYTE;

pub use message::*;

mod message;
mod traits;

/// In bytes. Corresponds to the PubSub default.
pub const MAX_WAKU_MESSAGE_SIZE: usize = MEBIBYTE as usize;

/// Plaintext payload.
pub const VERSION_0: u32 = 0;

/// Encrypted payload, see [26/WAKU2-PAYLOAD](https://rfc.vac.dev/spec/26/).
pub const VERSION_1: u32 = 1;
