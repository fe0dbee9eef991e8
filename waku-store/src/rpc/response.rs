use crate::error::CodecError;
use crate::response::{HistoryErrorKind, HistoryResponse, HistoryResponseBody};
use crate::rpc::proto::waku::store::v2beta4::history_response::Error as ErrorCode;
use crate::rpc::proto::waku::store::v2beta4::history_rpc::ReqRes;
use crate::rpc::proto::waku::store::v2beta4::{HistoryResponse as HistoryResponseProto, HistoryRpc};

impl From<i32> for HistoryErrorKind {
    fn from(code: i32) -> Self {
        match ErrorCode::from_i32(code) {
            Some(ErrorCode::InvalidCursor) => HistoryErrorKind::InvalidCursor,
            Some(ErrorCode::ServiceUnavailable) => HistoryErrorKind::ServiceUnavailable,
            _ => HistoryErrorKind::Unknown(code),
        }
    }
}

impl From<HistoryErrorKind> for i32 {
    fn from(kind: HistoryErrorKind) -> Self {
        match kind {
            HistoryErrorKind::InvalidCursor => ErrorCode::InvalidCursor as i32,
            HistoryErrorKind::ServiceUnavailable => ErrorCode::ServiceUnavailable as i32,
            HistoryErrorKind::Unknown(code) => code,
        }
    }
}

impl TryFrom<HistoryRpc> for HistoryResponse {
    type Error = CodecError;

    fn try_from(rpc: HistoryRpc) -> Result<Self, Self::Error> {
        let response = match rpc.req_res {
            Some(ReqRes::Response(response)) => response,
            _ => return Err(CodecError::MissingField("response")),
        };

        if response.error != ErrorCode::None as i32 {
            return Ok(HistoryResponse {
                request_id: rpc.request_id,
                result: Err(response.error.into()),
            });
        }

        Ok(HistoryResponse {
            request_id: rpc.request_id,
            result: Ok(HistoryResponseBody {
                messages: response.messages.into_iter().map(Into::into).collect(),
                paging_info: response.paging_info.map(Into::into),
            }),
        })
    }
}

impl From<HistoryResponse> for HistoryRpc {
    fn from(response: HistoryResponse) -> Self {
        let body = match response.result {
            Ok(body) => HistoryResponseProto {
                messages: body.messages.into_iter().map(Into::into).collect(),
                paging_info: body.paging_info.map(Into::into),
                error: ErrorCode::None as i32,
            },
            Err(kind) => HistoryResponseProto {
                messages: Vec::new(),
                paging_info: None,
                error: kind.into(),
            },
        };

        HistoryRpc {
            request_id: response.request_id,
            req_res: Some(ReqRes::Response(body)),
        }
    }
}
