use std::collections::HashMap;

use bytes::Bytes;
use futures::StreamExt;
use libp2p::request_response::{self, OutboundFailure, RequestId};
use libp2p::swarm::SwarmEvent;
use libp2p::{identify, PeerId};
use log::{debug, error, info, trace, warn};
use tokio::sync::{mpsc, oneshot};

use waku_store::{Peer, TransportError};

use crate::behaviour;
use crate::event_loop::command::Command;
use crate::event_loop::event::Event;

type StoreResponseSender = oneshot::Sender<Result<Bytes, TransportError>>;

pub struct EventLoop {
    switch: libp2p::Swarm<behaviour::Behaviour>,
    command_source: mpsc::Receiver<Command>,
    event_sink: mpsc::Sender<Event>,
    /// Connected peers, in connection order.
    peers: Vec<Peer>,
    pending_store_requests: HashMap<RequestId, StoreResponseSender>,
}

impl EventLoop {
    pub fn new(
        switch: libp2p::Swarm<behaviour::Behaviour>,
        command_source: mpsc::Receiver<Command>,
        event_sink: mpsc::Sender<Event>,
    ) -> Self {
        Self {
            switch,
            command_source,
            event_sink,
            peers: Vec::new(),
            pending_store_requests: HashMap::new(),
        }
    }

    pub async fn dispatch(mut self) {
        loop {
            tokio::select! {
                command = self.command_source.recv() => match command {
                    Some(cmd) => { self.handle_command(cmd); },
                    None => { debug!("got empty command. terminating node event loop"); return },
                },
                event = self.switch.select_next_some() => self.handle_swarm_event(event),
            }
        }
    }

    fn emit(&self, event: Event) {
        // Events nobody reads must not stall the loop
        if let Err(err) = self.event_sink.try_send(event) {
            trace!("node event dropped: {err}");
        }
    }

    fn handle_swarm_event<E: std::fmt::Debug>(
        &mut self,
        event: SwarmEvent<behaviour::Event, E>,
    ) {
        match event {
            SwarmEvent::NewListenAddr { address, .. } => info!("switch listening on: {address:?}"),
            SwarmEvent::ConnectionEstablished { peer_id, .. } => {
                if !self.peers.iter().any(|peer| peer.id == peer_id) {
                    debug!("connected to {peer_id}");
                    self.peers.push(Peer::new(peer_id, Vec::<String>::new()));
                    self.emit(Event::PeerConnected { peer_id });
                }
            }
            SwarmEvent::ConnectionClosed {
                peer_id,
                num_established: 0,
                ..
            } => {
                debug!("disconnected from {peer_id}");
                self.peers.retain(|peer| peer.id != peer_id);
                self.emit(Event::PeerDisconnected { peer_id });
            }
            SwarmEvent::OutgoingConnectionError { peer_id, error, .. } => {
                warn!("outgoing connection to {peer_id:?} failed: {error}");
            }
            SwarmEvent::Behaviour(behaviour::Event::Identify(event)) => {
                self.handle_identify_event(*event)
            }
            SwarmEvent::Behaviour(behaviour::Event::WakuStore(event)) => {
                self.handle_store_event(event)
            }
            SwarmEvent::Behaviour(event) => trace!("{event:?}"),
            event => trace!("{event:?}"),
        }
    }

    fn handle_identify_event(&mut self, event: identify::Event) {
        if let identify::Event::Received { peer_id, info } = event {
            debug!("peer {peer_id} supports: {:?}", info.protocols);

            let peer = Peer::new(peer_id, info.protocols);
            if update_connected_peer(&mut self.peers, peer.clone()) {
                self.emit(Event::PeerIdentified { peer });
            } else {
                debug!("ignoring identify info of disconnected peer {peer_id}");
            }
        }
    }

    fn handle_store_event(&mut self, event: waku_store::behaviour::Event) {
        match event {
            request_response::Event::Message {
                peer,
                message:
                    request_response::Message::Response {
                        request_id,
                        response,
                    },
            } => {
                trace!("store response {request_id} from {peer}");
                self.complete_store_request(request_id, Ok(response));
            }
            request_response::Event::Message {
                peer,
                message: request_response::Message::Request { .. },
            } => {
                debug!("ignoring store request from {peer}");
            }
            request_response::Event::OutboundFailure {
                peer,
                request_id,
                error,
            } => {
                debug!("store request {request_id} to {peer} failed: {error}");
                self.complete_store_request(request_id, Err(transport_error(error)));
            }
            event => trace!("{event:?}"),
        }
    }

    fn complete_store_request(
        &mut self,
        request_id: RequestId,
        result: Result<Bytes, TransportError>,
    ) {
        match self.pending_store_requests.remove(&request_id) {
            Some(sender) => {
                if sender.send(result).is_err() {
                    debug!("store request {request_id} was abandoned");
                }
            }
            None => warn!("unknown store request: {request_id}"),
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        trace!("handle command: {cmd}");

        match cmd {
            Command::SwitchListenOn { address, sender } => {
                match self.switch.listen_on(address) {
                    Ok(_) => sender.send(Ok(())),
                    Err(e) => sender.send(Err(e.into())),
                }
                .unwrap_or_else(|e| {
                    error!(
                        "send '{}' command response failed: {:?}.",
                        "switch_listen_on", e
                    );
                });
            }
            Command::SwitchDial { address, sender } => {
                match self.switch.dial(address) {
                    Ok(_) => sender.send(Ok(())),
                    Err(e) => sender.send(Err(e.into())),
                }
                .unwrap_or_else(|e| {
                    error!("send '{}' command response failed: {:?}.", "switch_dial", e);
                });
            }
            Command::ConnectedPeers { sender } => {
                sender.send(self.peers.clone()).unwrap_or_else(|e| {
                    error!(
                        "send '{}' command response failed: {:?}.",
                        "connected_peers", e
                    );
                });
            }
            Command::StoreRequest {
                peer_id,
                request,
                sender,
            } => self.send_store_request(peer_id, request, sender),
        }
    }

    fn send_store_request(
        &mut self,
        peer_id: PeerId,
        request: Bytes,
        sender: StoreResponseSender,
    ) {
        let Some(waku_store) = self.switch.behaviour_mut().waku_store.as_mut() else {
            let _ = sender.send(Err(TransportError::Unavailable(
                "store protocol is disabled".to_string(),
            )));
            return;
        };

        let request_id = waku_store.send_request(&peer_id, request);
        trace!("store request {request_id} sent to {peer_id}");
        self.pending_store_requests.insert(request_id, sender);
    }
}

/// Replace the entry of an already connected peer. Returns false for unknown peers.
fn update_connected_peer(peers: &mut [Peer], peer: Peer) -> bool {
    match peers.iter_mut().find(|known| known.id == peer.id) {
        Some(known) => {
            *known = peer;
            true
        }
        None => false,
    }
}

fn transport_error(failure: OutboundFailure) -> TransportError {
    match failure {
        OutboundFailure::Timeout => TransportError::Timeout,
        OutboundFailure::DialFailure => TransportError::DialFailure,
        OutboundFailure::ConnectionClosed => TransportError::ConnectionClosed,
        OutboundFailure::UnsupportedProtocols => {
            TransportError::UnsupportedProtocol(waku_store::PROTOCOL_ID.to_string())
        }
    }
}
