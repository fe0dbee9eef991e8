use bytes::Bytes;
use futures::StreamExt;
use libp2p::identity::{secp256k1, Keypair};
use libp2p::request_response::{self, ProtocolSupport};
use libp2p::swarm::{keep_alive, NetworkBehaviour, SwarmBuilder, SwarmEvent};
use libp2p::{identify, PeerId, Swarm};

use waku_core::message::WakuMessage;
use waku_node::memory_transport;
use waku_store::rpc::{decode_request, encode_response};
use waku_store::{
    HistoryRequest, HistoryResponse, HistoryResponseBody, PageCursor, PagingInfo,
};

#[derive(NetworkBehaviour)]
#[behaviour(out_event = "ResponderEvent")]
pub struct ResponderBehaviour {
    identify: identify::Behaviour,
    keep_alive: keep_alive::Behaviour,
    store: waku_store::behaviour::Behaviour,
}

#[derive(Debug)]
pub enum ResponderEvent {
    Identify(Box<identify::Event>),
    Store(waku_store::behaviour::Event),
}

impl From<identify::Event> for ResponderEvent {
    fn from(event: identify::Event) -> Self {
        ResponderEvent::Identify(Box::new(event))
    }
}

impl From<waku_store::behaviour::Event> for ResponderEvent {
    fn from(event: waku_store::behaviour::Event) -> Self {
        ResponderEvent::Store(event)
    }
}

impl From<void::Void> for ResponderEvent {
    fn from(event: void::Void) -> Self {
        void::unreachable(event)
    }
}

pub fn secp256k1_keypair(key: &str) -> Keypair {
    let raw_key = hex::decode(key).expect("key to be valid");
    let secret_key = secp256k1::SecretKey::try_from_bytes(raw_key).unwrap();
    secp256k1::Keypair::from(secret_key).into()
}

/// A libp2p peer serving store queries from a fixed list of messages.
pub fn new_store_responder(keypair: &Keypair) -> Swarm<ResponderBehaviour> {
    let peer_id = PeerId::from(keypair.public());
    let transport = memory_transport(keypair).expect("create the transport");
    let behaviour = ResponderBehaviour {
        identify: identify::Behaviour::new(identify::Config::new(
            "/ipfs/id/1.0.0".to_owned(),
            keypair.public(),
        )),
        keep_alive: keep_alive::Behaviour,
        store: waku_store::behaviour::new_behaviour(
            ProtocolSupport::Full,
            std::time::Duration::from_secs(10),
        ),
    };
    SwarmBuilder::with_tokio_executor(transport, behaviour, peer_id).build()
}

fn cursor_of(index: usize) -> PageCursor {
    PageCursor {
        digest: Bytes::copy_from_slice(&(index as u64).to_be_bytes()),
        receiver_time: index as i64,
        sender_time: index as i64,
        pubsub_topic: String::new(),
    }
}

fn index_of(cursor: &PageCursor) -> Option<usize> {
    let digest: [u8; 8] = cursor.digest.as_ref().try_into().ok()?;
    Some(u64::from_be_bytes(digest) as usize)
}

/// Forward paging over the messages matching the query's content topics.
pub fn answer(messages: &[WakuMessage], request: HistoryRequest) -> HistoryResponse {
    let query = &request.query;
    let matching = messages
        .iter()
        .filter(|msg| {
            query.content_topics.is_empty() || query.content_topics.contains(&msg.content_topic)
        })
        .collect::<Vec<_>>();

    let start = query
        .paging_info
        .cursor
        .as_ref()
        .and_then(index_of)
        .map_or(0, |index| index + 1)
        .min(matching.len());
    let end = (start + query.paging_info.page_size as usize).min(matching.len());

    HistoryResponse {
        request_id: request.request_id.clone(),
        result: Ok(HistoryResponseBody {
            messages: matching[start..end].iter().map(|msg| (*msg).clone()).collect(),
            paging_info: Some(PagingInfo {
                page_size: (end - start) as u64,
                direction: query.paging_info.direction,
                cursor: (end > start).then(|| cursor_of(end - 1)),
            }),
        }),
    }
}

pub async fn serve_history(mut swarm: Swarm<ResponderBehaviour>, messages: Vec<WakuMessage>) {
    loop {
        let event = swarm.select_next_some().await;
        log::trace!("Event: {:?}", event);

        if let SwarmEvent::Behaviour(ResponderEvent::Store(request_response::Event::Message {
            message: request_response::Message::Request {
                request, channel, ..
            },
            ..
        })) = event
        {
            let request = decode_request(&request).expect("a valid store request");
            let response = encode_response(answer(&messages, request));
            swarm
                .behaviour_mut()
                .store
                .send_response(channel, response)
                .expect("response to be sent");
        }
    }
}
