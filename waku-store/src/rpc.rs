//! Store protocol wire format (`waku.store.v2beta4`) and conversions from and to the
//! domain types.
use bytes::Bytes;
use prost::Message;

use waku_core::message::MAX_WAKU_MESSAGE_SIZE;

use crate::error::CodecError;
use crate::pagination::MAX_PAGE_SIZE;
use crate::request::HistoryRequest;
use crate::response::HistoryResponse;

mod pagination;
mod request;
mod response;

pub mod proto {
    pub mod waku {
        pub mod store {
            pub mod v2beta4 {
                include!("rpc/gen/waku.store.v2beta4.rs");
            }
        }
    }
}

/// Largest frame accepted on a store stream: a full page of maximum size messages plus
/// 64 KiB for the protocol overhead.
pub const MAX_PROTOBUF_SIZE: usize = MAX_PAGE_SIZE as usize * MAX_WAKU_MESSAGE_SIZE + 64 * 1024;

use proto::waku::store::v2beta4::HistoryRpc;

pub fn encode_request(request: HistoryRequest) -> Bytes {
    HistoryRpc::from(request).encode_to_vec().into()
}

pub fn decode_request(bytes: &[u8]) -> Result<HistoryRequest, CodecError> {
    HistoryRpc::decode(bytes)?.try_into()
}

pub fn encode_response(response: HistoryResponse) -> Bytes {
    HistoryRpc::from(response).encode_to_vec().into()
}

pub fn decode_response(bytes: &[u8]) -> Result<HistoryResponse, CodecError> {
    HistoryRpc::decode(bytes)?.try_into()
}
