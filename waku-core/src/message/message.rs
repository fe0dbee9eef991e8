use std::fmt::{Debug, Formatter};

use bytes::Bytes;

use crate::content_topic::ContentTopic;

/// A Waku message as exchanged on the wire, before any payload decryption.
#[derive(Clone, Eq, PartialEq)]
pub struct WakuMessage {
    pub payload: Bytes,
    pub content_topic: ContentTopic,
    pub version: u32,
    /// Sender timestamp, in nanoseconds since the Unix epoch.
    pub timestamp: Option<i64>,
    pub meta: Option<Bytes>,
    pub ephemeral: bool,
}

impl WakuMessage {
    /// A plaintext (version 0) message.
    pub fn new<T>(payload: impl Into<Bytes>, content_topic: T) -> Self
    where
        T: Into<ContentTopic>,
    {
        Self {
            payload: payload.into(),
            content_topic: content_topic.into(),
            version: 0,
            timestamp: None,
            meta: None,
            ephemeral: false,
        }
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Hex representation of a byte string, truncated to its first 32 bytes.
pub fn hex_preview(bytes: &[u8]) -> String {
    match bytes.get(0..32) {
        Some(slice) if bytes.len() > 32 => format!("{}…", hex::encode(slice)),
        _ => hex::encode(bytes),
    }
}

impl Debug for WakuMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let meta_fmt = self
            .meta
            .as_ref()
            .map_or("None".to_string(), |meta| hex::encode(meta));

        f.debug_struct("WakuMessage")
            .field("content_topic", &self.content_topic)
            .field("version", &self.version)
            .field("timestamp", &self.timestamp)
            .field("meta", &meta_fmt)
            .field("payload", &hex_preview(&self.payload))
            .field("ephemeral", &self.ephemeral)
            .finish()
    }
}
