use libp2p::PeerId;
use strum_macros::Display;

use waku_store::Peer;

#[derive(Debug, Display)]
pub enum Event {
    PeerConnected { peer_id: PeerId },
    PeerDisconnected { peer_id: PeerId },
    /// The peer announced its protocols through identify.
    PeerIdentified { peer: Peer },
}
