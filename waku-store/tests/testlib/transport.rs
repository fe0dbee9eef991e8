use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use libp2p::PeerId;

use waku_store::rpc::{decode_request, encode_response};
use waku_store::{HistoryRequest, Peer, StoreTransport, TransportError, PROTOCOL_ID};

use crate::testlib::store::MemoryStore;

type Responder = dyn Fn(usize, &HistoryRequest) -> Result<Bytes, TransportError> + Send + Sync;

pub struct RecordedRequest {
    pub peer_id: PeerId,
    pub protocol: String,
    pub bytes: Bytes,
    pub request: HistoryRequest,
}

/// A [`StoreTransport`] answering every request with a responder closure. The closure gets
/// the zero based index of the request within the transport's lifetime.
pub struct MockTransport {
    peers: Vec<Peer>,
    responder: Box<Responder>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub fn store_peer() -> Peer {
    Peer::new(PeerId::random(), [PROTOCOL_ID, "/ipfs/id/1.0.0"])
}

pub fn relay_peer() -> Peer {
    Peer::new(PeerId::random(), ["/vac/waku/relay/2.0.0", "/ipfs/id/1.0.0"])
}

impl MockTransport {
    pub fn new<F>(peers: Vec<Peer>, responder: F) -> Self
    where
        F: Fn(usize, &HistoryRequest) -> Result<Bytes, TransportError> + Send + Sync + 'static,
    {
        Self {
            peers,
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A single store peer serving the given archive.
    pub fn serving(store: Arc<MemoryStore>) -> Self {
        Self::serving_peers(vec![store_peer()], store)
    }

    pub fn serving_peers(peers: Vec<Peer>, store: Arc<MemoryStore>) -> Self {
        Self::new(peers, move |_, request| {
            Ok(encode_response(store.handle(request)))
        })
    }

    pub fn peers(&self) -> &[Peer] {
        &self.peers
    }

    pub fn round_trips(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<HistoryRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|recorded| recorded.request.clone())
            .collect()
    }

    pub fn with_requests<R>(&self, f: impl FnOnce(&[RecordedRequest]) -> R) -> R {
        f(&self.requests.lock().unwrap())
    }
}

#[async_trait]
impl StoreTransport for MockTransport {
    async fn connected_peers(&self) -> Vec<Peer> {
        self.peers.clone()
    }

    async fn send_request(
        &self,
        peer_id: &PeerId,
        protocol: &str,
        request: Bytes,
    ) -> Result<Bytes, TransportError> {
        let decoded = decode_request(&request).expect("client to send a valid request");

        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(RecordedRequest {
                peer_id: *peer_id,
                protocol: protocol.to_string(),
                bytes: request,
                request: decoded.clone(),
            });
            requests.len() - 1
        };

        (self.responder)(index, &decoded)
    }
}
