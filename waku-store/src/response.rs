use waku_core::message::WakuMessage;

use crate::pagination::{PageCursor, PagingInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryResponseBody {
    pub messages: Vec<WakuMessage>,
    pub paging_info: Option<PagingInfo>,
}

impl HistoryResponseBody {
    pub fn next_page(&self) -> Option<&PageCursor> {
        self.paging_info
            .as_ref()
            .and_then(|info| info.cursor.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryErrorKind {
    #[error("invalid pagination cursor")]
    InvalidCursor,

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("unknown error: {0}")]
    Unknown(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryResponse {
    pub request_id: String,
    pub result: Result<HistoryResponseBody, HistoryErrorKind>,
}
