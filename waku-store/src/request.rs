use waku_core::content_topic::ContentTopic;
use waku_core::pubsub_topic::PubsubTopic;

use crate::pagination::PagingInfo;

/// Inclusive sender timestamp bounds, in nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFilter {
    pub start_time: i64,
    pub end_time: i64,
}

impl TimeFilter {
    pub fn new(start_time: i64, end_time: i64) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        self.start_time <= timestamp && timestamp <= self.end_time
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub pubsub_topic: Option<PubsubTopic>,
    /// An empty list doesn't restrict the content topics.
    pub content_topics: Vec<ContentTopic>,
    pub time_filter: Option<TimeFilter>,
    pub paging_info: PagingInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub request_id: String,
    pub query: HistoryQuery,
}
