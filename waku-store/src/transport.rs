use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use libp2p::PeerId;

use crate::peer::Peer;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("failed to dial peer")]
    DialFailure,

    #[error("connection closed before a response was received")]
    ConnectionClosed,

    #[error("peer does not support protocol {0}")]
    UnsupportedProtocol(String),

    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Request/response access to the peers a node knows about.
///
/// The store client only needs to list candidate peers and exchange one request and one
/// response per round trip. Framing on the stream is the transport's business: `request`
/// and the returned bytes are bare protobuf messages.
#[async_trait]
pub trait StoreTransport: Send + Sync {
    /// Currently connected peers along with the protocols they announced.
    async fn connected_peers(&self) -> Vec<Peer>;

    async fn send_request(
        &self,
        peer_id: &PeerId,
        protocol: &str,
        request: Bytes,
    ) -> Result<Bytes, TransportError>;
}

#[async_trait]
impl<T: StoreTransport + ?Sized> StoreTransport for Arc<T> {
    async fn connected_peers(&self) -> Vec<Peer> {
        (**self).connected_peers().await
    }

    async fn send_request(
        &self,
        peer_id: &PeerId,
        protocol: &str,
        request: Bytes,
    ) -> Result<Bytes, TransportError> {
        (**self).send_request(peer_id, protocol, request).await
    }
}
