use crate::message::WakuMessage;
use crate::proto::waku::message::v1::WakuMessage as WakuMessageProto;

impl From<WakuMessageProto> for WakuMessage {
    fn from(proto: WakuMessageProto) -> Self {
        Self {
            payload: proto.payload,
            content_topic: proto.content_topic.into(),
            version: proto.version.unwrap_or(0),
            timestamp: proto.timestamp,
            meta: proto.meta,
            ephemeral: proto.ephemeral.unwrap_or(false),
        }
    }
}

impl From<WakuMessage> for WakuMessageProto {
    fn from(message: WakuMessage) -> Self {
        WakuMessageProto {
            payload: message.payload,
            content_topic: message.content_topic.into(),
            version: Some(message.version),
            timestamp: message.timestamp,
            meta: message.meta,
            rate_limit_proof: None,
            ephemeral: Some(message.ephemeral),
        }
    }
}
