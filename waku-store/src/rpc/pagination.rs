use crate::pagination::{PageCursor, PageDirection, PagingInfo};
use crate::rpc::proto::waku::store::v2beta4::paging_info::Direction;
use crate::rpc::proto::waku::store::v2beta4::{Index, PagingInfo as PagingInfoProto};

impl From<Index> for PageCursor {
    fn from(index: Index) -> Self {
        Self {
            digest: index.digest,
            receiver_time: index.receiver_time,
            sender_time: index.sender_time,
            pubsub_topic: index.pubsub_topic,
        }
    }
}

impl From<PageCursor> for Index {
    fn from(cursor: PageCursor) -> Self {
        Self {
            digest: cursor.digest,
            receiver_time: cursor.receiver_time,
            sender_time: cursor.sender_time,
            pubsub_topic: cursor.pubsub_topic,
        }
    }
}

impl From<Direction> for PageDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Backward => PageDirection::Backward,
            Direction::Forward => PageDirection::Forward,
        }
    }
}

impl From<PageDirection> for Direction {
    fn from(direction: PageDirection) -> Self {
        match direction {
            PageDirection::Backward => Direction::Backward,
            PageDirection::Forward => Direction::Forward,
        }
    }
}

impl From<PagingInfoProto> for PagingInfo {
    fn from(info: PagingInfoProto) -> Self {
        // Unknown direction values fall back to the protocol default
        let direction: PageDirection = Direction::from_i32(info.direction)
            .map(Into::into)
            .unwrap_or_default();

        Self {
            page_size: info.page_size,
            direction,
            cursor: info.cursor.map(Into::into),
        }
    }
}

impl From<PagingInfo> for PagingInfoProto {
    fn from(info: PagingInfo) -> Self {
        Self {
            page_size: info.page_size,
            cursor: info.cursor.map(Into::into),
            direction: Direction::from(info.direction) as i32,
        }
    }
}
