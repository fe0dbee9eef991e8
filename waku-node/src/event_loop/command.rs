use bytes::Bytes;
use libp2p::{Multiaddr, PeerId};
use strum_macros::Display;
use tokio::sync::oneshot;

use waku_store::{Peer, TransportError};

#[derive(Debug, Display)]
pub enum Command {
    SwitchListenOn {
        address: Multiaddr,
        sender: oneshot::Sender<anyhow::Result<()>>,
    },
    SwitchDial {
        address: Multiaddr,
        sender: oneshot::Sender<anyhow::Result<()>>,
    },
    ConnectedPeers {
        sender: oneshot::Sender<Vec<Peer>>,
    },
    StoreRequest {
        peer_id: PeerId,
        request: Bytes,
        sender: oneshot::Sender<Result<Bytes, TransportError>>,
    },
}

impl Command {
    pub fn switch_listen_on(
        address: Multiaddr,
        sender: oneshot::Sender<anyhow::Result<()>>,
    ) -> Self {
        Command::SwitchListenOn { address, sender }
    }

    pub fn switch_dial(address: Multiaddr, sender: oneshot::Sender<anyhow::Result<()>>) -> Self {
        Command::SwitchDial { address, sender }
    }

    pub fn connected_peers(sender: oneshot::Sender<Vec<Peer>>) -> Self {
        Command::ConnectedPeers { sender }
    }

    pub fn store_request(
        peer_id: PeerId,
        request: Bytes,
        sender: oneshot::Sender<Result<Bytes, TransportError>>,
    ) -> Self {
        Command::StoreRequest {
            peer_id,
            request,
            sender,
        }
    }
}
