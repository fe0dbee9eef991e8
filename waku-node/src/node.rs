use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use bytes::Bytes;
use libp2p::swarm::SwarmBuilder;
use libp2p::{Multiaddr, PeerId};
use log::{debug, error};
use tokio::sync::{mpsc, oneshot};

use waku_store::{Peer, StoreTransport, TransportError, PROTOCOL_ID};

use crate::behaviour::Behaviour;
use crate::behaviour::Config as BehaviourConfig;
use crate::config::NodeConfig;
use crate::event_loop::{Command, Event, EventLoop};
use crate::transport::{default_transport, BoxedP2PTransport};

const PEER_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct Node {
    config: NodeConfig,
    peer_id: PeerId,
    command_sender: mpsc::Sender<Command>,
    event_receiver: mpsc::Receiver<Event>,
}

impl Node {
    pub fn new(config: NodeConfig) -> anyhow::Result<Self> {
        let transport = default_transport(&config.keypair)?;
        Self::new_with_transport(config, transport)
    }

    /// Must be called from within a tokio runtime: the node event loop is spawned on it.
    pub fn new_with_transport(
        config: NodeConfig,
        transport: BoxedP2PTransport,
    ) -> anyhow::Result<Self> {
        let peer_id = PeerId::from(&config.keypair.public());

        let switch = {
            let behaviour = Behaviour::new(BehaviourConfig {
                local_public_key: config.keypair.public(),
                keep_alive: config.keepalive,
                store: config.store.clone(),
            });
            SwarmBuilder::with_tokio_executor(transport, behaviour, peer_id).build()
        };

        let (command_sender, command_receiver) = mpsc::channel(32);
        let (event_sender, event_receiver) = mpsc::channel(32);
        let ev_loop = EventLoop::new(switch, command_receiver, event_sender);

        debug!("start node event loop");
        tokio::spawn(ev_loop.dispatch());

        Ok(Self {
            config,
            peer_id,
            command_sender,
            event_receiver,
        })
    }

    pub fn peer_id(&self) -> PeerId {
        self.peer_id
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub async fn recv_event(&mut self) -> Option<Event> {
        self.event_receiver.recv().await
    }

    pub async fn switch_listen_on(&self, address: &Multiaddr) -> anyhow::Result<()> {
        let (resp_tx, resp_rx) = oneshot::channel();
        self.command_sender
            .send(Command::switch_listen_on(address.clone(), resp_tx))
            .await?;

        resp_rx.await?
    }

    pub async fn switch_dial(&self, address: &Multiaddr) -> anyhow::Result<()> {
        let (resp_tx, resp_rx) = oneshot::channel();
        self.command_sender
            .send(Command::switch_dial(address.clone(), resp_tx))
            .await?;

        resp_rx.await?
    }

    /// Peers with an open connection, along with the protocols they announced.
    pub async fn peers(&self) -> anyhow::Result<Vec<Peer>> {
        let (resp_tx, resp_rx) = oneshot::channel();
        self.command_sender
            .send(Command::connected_peers(resp_tx))
            .await?;

        Ok(resp_rx.await?)
    }

    /// Wait until a connected peer announces support for `protocol`.
    pub async fn wait_for_peer(&self, protocol: &str, timeout: Duration) -> anyhow::Result<Peer> {
        let wait = async {
            loop {
                if let Some(peer) = self
                    .peers()
                    .await?
                    .into_iter()
                    .find(|peer| peer.supports(protocol))
                {
                    return anyhow::Ok(peer);
                }
                tokio::time::sleep(PEER_POLL_INTERVAL).await;
            }
        };

        tokio::time::timeout(timeout, wait)
            .await
            .map_err(|_| anyhow!("no peer supporting {protocol} within {timeout:?}"))?
    }
}

#[async_trait]
impl StoreTransport for Node {
    async fn connected_peers(&self) -> Vec<Peer> {
        self.peers().await.unwrap_or_else(|err| {
            error!("failed to list connected peers: {err}");
            Vec::new()
        })
    }

    async fn send_request(
        &self,
        peer_id: &PeerId,
        protocol: &str,
        request: Bytes,
    ) -> Result<Bytes, TransportError> {
        if protocol != PROTOCOL_ID {
            return Err(TransportError::UnsupportedProtocol(protocol.to_string()));
        }

        let event_loop_gone =
            || TransportError::Unavailable("node event loop terminated".to_string());

        let (resp_tx, resp_rx) = oneshot::channel();
        self.command_sender
            .send(Command::store_request(*peer_id, request, resp_tx))
            .await
            .map_err(|_| event_loop_gone())?;

        resp_rx.await.map_err(|_| event_loop_gone())?
    }
}
