use std::iter;
use std::time::Duration;

use bytes::Bytes;
use libp2p::request_response::{self, ProtocolSupport};

use crate::codec::Codec;
use crate::protocol::StoreProtocol;

pub type Behaviour = request_response::Behaviour<Codec>;

pub type Event = request_response::Event<Bytes, Bytes>;

/// Store request-response behaviour.
///
/// A client only needs [`ProtocolSupport::Outbound`]; a node answering queries uses
/// [`ProtocolSupport::Full`].
pub fn new_behaviour(support: ProtocolSupport, request_timeout: Duration) -> Behaviour {
    let mut config = request_response::Config::default();
    config.set_request_timeout(request_timeout);

    request_response::Behaviour::new(Codec, iter::once((StoreProtocol, support)), config)
}
