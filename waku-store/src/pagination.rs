use bytes::Bytes;

/// Page size used when the caller doesn't ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest page a store node is expected to serve.
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageDirection {
    Backward,
    #[default]
    Forward,
}

/// Store index of the last message of a page. Only meaningful for the query it was
/// returned for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    pub digest: Bytes,
    pub receiver_time: i64,
    pub sender_time: i64,
    pub pubsub_topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingInfo {
    pub page_size: u64,
    pub direction: PageDirection,
    pub cursor: Option<PageCursor>,
}

impl Default for PagingInfo {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            direction: PageDirection::default(),
            cursor: None,
        }
    }
}

/// Returned by a page consumer to tell the query whether to fetch the next page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Continue,
    Stop,
}
