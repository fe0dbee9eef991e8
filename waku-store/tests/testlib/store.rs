use std::sync::Mutex;

use bytes::Bytes;

use waku_core::message::WakuMessage;
use waku_core::pubsub_topic::PubsubTopic;
use waku_store::{
    HistoryErrorKind, HistoryRequest, HistoryResponse, HistoryResponseBody, PageCursor,
    PageDirection, PagingInfo, MAX_PAGE_SIZE,
};

struct StoredMessage {
    index: u64,
    pubsub_topic: PubsubTopic,
    message: WakuMessage,
}

impl StoredMessage {
    fn sender_time(&self) -> i64 {
        self.message.timestamp.unwrap_or(0)
    }

    fn cursor(&self) -> PageCursor {
        PageCursor {
            digest: Bytes::copy_from_slice(&self.index.to_be_bytes()),
            receiver_time: self.sender_time(),
            sender_time: self.sender_time(),
            pubsub_topic: self.pubsub_topic.to_string(),
        }
    }
}

/// A store node archive kept in memory, answering history queries the way a store node
/// does: filter, order by sender time, then page from the cursor in the requested
/// direction.
#[derive(Default)]
pub struct MemoryStore {
    messages: Mutex<Vec<StoredMessage>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&self, message: WakuMessage) {
        self.push_to(PubsubTopic::default(), message);
    }

    pub fn push_to(&self, pubsub_topic: PubsubTopic, message: WakuMessage) {
        let mut messages = self.messages.lock().unwrap();
        let index = messages.len() as u64;
        messages.push(StoredMessage {
            index,
            pubsub_topic,
            message,
        });
    }

    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn handle(&self, request: &HistoryRequest) -> HistoryResponse {
        HistoryResponse {
            request_id: request.request_id.clone(),
            result: self.query(request),
        }
    }

    fn query(&self, request: &HistoryRequest) -> Result<HistoryResponseBody, HistoryErrorKind> {
        let query = &request.query;
        let messages = self.messages.lock().unwrap();

        let mut matching = messages
            .iter()
            .filter(|stored| {
                query
                    .pubsub_topic
                    .as_ref()
                    .map_or(true, |topic| &stored.pubsub_topic == topic)
            })
            .filter(|stored| {
                query.content_topics.is_empty()
                    || query
                        .content_topics
                        .contains(&stored.message.content_topic)
            })
            .filter(|stored| {
                query
                    .time_filter
                    .map_or(true, |filter| filter.contains(stored.sender_time()))
            })
            .collect::<Vec<_>>();
        matching.sort_by_key(|stored| (stored.sender_time(), stored.index));

        let paging_info = &query.paging_info;
        let page_size = paging_info.page_size.clamp(1, MAX_PAGE_SIZE) as usize;

        let position = match &paging_info.cursor {
            None => None,
            Some(cursor) => Some(
                matching
                    .iter()
                    .position(|stored| stored.cursor().digest == cursor.digest)
                    .ok_or(HistoryErrorKind::InvalidCursor)?,
            ),
        };

        let page = match paging_info.direction {
            PageDirection::Forward => {
                let start = position.map_or(0, |p| p + 1);
                let end = (start + page_size).min(matching.len());
                &matching[start.min(end)..end]
            }
            PageDirection::Backward => {
                let end = position.unwrap_or(matching.len());
                let start = end.saturating_sub(page_size);
                &matching[start..end]
            }
        };

        let cursor = match paging_info.direction {
            PageDirection::Forward => page.last(),
            PageDirection::Backward => page.first(),
        }
        .map(|stored| stored.cursor());

        Ok(HistoryResponseBody {
            messages: page.iter().map(|stored| stored.message.clone()).collect(),
            paging_info: Some(PagingInfo {
                page_size: page.len() as u64,
                direction: paging_info.direction,
                cursor,
            }),
        })
    }
}
