//! Waku v2 store protocol client: history queries against remote store nodes, with
//! transparent payload decryption.
//!
//! See [13/WAKU2-STORE](https://rfc.vac.dev/spec/13/).

pub use client::*;
pub use error::*;
pub use pagination::*;
pub use peer::*;
pub use protocol::*;
pub use request::*;
pub use response::*;
pub use transport::*;

pub mod behaviour;
mod client;
mod codec;
mod error;
mod pagination;
mod peer;
mod protocol;
mod request;
mod response;
pub mod rpc;
mod transport;

pub use codec::Codec;
