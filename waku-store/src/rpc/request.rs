use crate::error::CodecError;
use crate::request::{HistoryQuery, HistoryRequest, TimeFilter};
use crate::rpc::proto::waku::store::v2beta4::history_rpc::ReqRes;
use crate::rpc::proto::waku::store::v2beta4::{
    ContentFilter, HistoryQuery as HistoryQueryProto, HistoryRpc,
};

impl From<HistoryRequest> for HistoryRpc {
    fn from(request: HistoryRequest) -> Self {
        let query = request.query;

        let content_filters = query
            .content_topics
            .into_iter()
            .map(|topic| ContentFilter {
                content_topic: topic.into(),
            })
            .collect();

        HistoryRpc {
            request_id: request.request_id,
            req_res: Some(ReqRes::Request(HistoryQueryProto {
                pubsub_topic: query.pubsub_topic.map(Into::into),
                content_filters,
                paging_info: Some(query.paging_info.into()),
                start_time: query.time_filter.map(|filter| filter.start_time),
                end_time: query.time_filter.map(|filter| filter.end_time),
            })),
        }
    }
}

impl TryFrom<HistoryRpc> for HistoryRequest {
    type Error = CodecError;

    fn try_from(rpc: HistoryRpc) -> Result<Self, Self::Error> {
        let query = match rpc.req_res {
            Some(ReqRes::Request(query)) => query,
            _ => return Err(CodecError::MissingField("query")),
        };

        let time_filter = match (query.start_time, query.end_time) {
            (None, None) => None,
            (start_time, end_time) => Some(TimeFilter {
                start_time: start_time.unwrap_or(i64::MIN),
                end_time: end_time.unwrap_or(i64::MAX),
            }),
        };

        Ok(HistoryRequest {
            request_id: rpc.request_id,
            query: HistoryQuery {
                pubsub_topic: query.pubsub_topic.map(Into::into),
                content_topics: query
                    .content_filters
                    .into_iter()
                    .map(|filter| filter.content_topic.into())
                    .collect(),
                time_filter,
                paging_info: query.paging_info.map(Into::into).unwrap_or_default(),
            },
        })
    }
}
