// @generated
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Index {
    #[prost(bytes="bytes", tag="1")]
    pub digest: ::prost::bytes::Bytes,
    #[prost(sint64, tag="2")]
    pub receiver_time: i64,
    #[prost(sint64, tag="3")]
    pub sender_time: i64,
    #[prost(string, tag="4")]
    pub pubsub_topic: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PagingInfo {
    #[prost(uint64, tag="1")]
    pub page_size: u64,
    #[prost(message, optional, tag="2")]
    pub cursor: ::core::option::Option<Index>,
    #[prost(enumeration="paging_info::Direction", tag="3")]
    pub direction: i32,
}
/// Nested message and enum types in `PagingInfo`.
pub mod paging_info {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Direction {
        Backward = 0,
        Forward = 1,
    }
    impl Direction {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Direction::Backward => "BACKWARD",
                Direction::Forward => "FORWARD",
            }
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContentFilter {
    #[prost(string, tag="1")]
    pub content_topic: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HistoryQuery {
    #[prost(string, optional, tag="2")]
    pub pubsub_topic: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, repeated, tag="3")]
    pub content_filters: ::prost::alloc::vec::Vec<ContentFilter>,
    #[prost(message, optional, tag="4")]
    pub paging_info: ::core::option::Option<PagingInfo>,
    #[prost(sint64, optional, tag="5")]
    pub start_time: ::core::option::Option<i64>,
    #[prost(sint64, optional, tag="6")]
    pub end_time: ::core::option::Option<i64>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HistoryResponse {
    #[prost(message, repeated, tag="2")]
    pub messages: ::prost::alloc::vec::Vec<::waku_core::proto::waku::message::v1::WakuMessage>,
    #[prost(message, optional, tag="3")]
    pub paging_info: ::core::option::Option<PagingInfo>,
    #[prost(enumeration="history_response::Error", tag="4")]
    pub error: i32,
}
/// Nested message and enum types in `HistoryResponse`.
pub mod history_response {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Error {
        None = 0,
        InvalidCursor = 1,
        ServiceUnavailable = 503,
    }
    impl Error {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Error::None => "NONE",
                Error::InvalidCursor => "INVALID_CURSOR",
                Error::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            }
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HistoryRpc {
    #[prost(string, tag="1")]
    pub request_id: ::prost::alloc::string::String,
    #[prost(oneof="history_rpc::ReqRes", tags="2, 3")]
    pub req_res: ::core::option::Option<history_rpc::ReqRes>,
}
/// Nested message and enum types in `HistoryRpc`.
pub mod history_rpc {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ReqRes {
        #[prost(message, tag="2")]
        Request(super::HistoryQuery),
        #[prost(message, tag="3")]
        Response(super::HistoryResponse),
    }
}
// @@protoc_insertion_point(module)
