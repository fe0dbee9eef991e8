use libp2p::PeerId;

use crate::protocol::PROTOCOL_ID;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peer {
    pub id: PeerId,
    /// Protocols announced by the peer, as reported by identify.
    pub protocols: Vec<String>,
}

impl Peer {
    pub fn new<I, S>(id: PeerId, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            protocols: protocols.into_iter().map(Into::into).collect(),
        }
    }

    pub fn supports(&self, protocol: &str) -> bool {
        self.protocols.iter().any(|p| p == protocol)
    }

    pub fn is_store_node(&self) -> bool {
        self.supports(PROTOCOL_ID)
    }
}

/// Pick the peer to send a store query to.
///
/// A requested peer is used as soon as it is known. Otherwise, or when no peer is
/// requested, the first store capable peer is returned.
pub fn select_peer<'a>(peers: &'a [Peer], requested: Option<&PeerId>) -> Option<&'a Peer> {
    if let Some(peer_id) = requested {
        if let Some(peer) = peers.iter().find(|peer| &peer.id == peer_id) {
            return Some(peer);
        }
        log::debug!("requested peer {peer_id} is not connected");
    }

    peers.iter().find(|peer| peer.is_store_node())
}
