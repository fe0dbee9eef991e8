//! Waku v2 core types shared by the protocol crates.

pub mod content_topic;
pub mod message;
pub mod proto;
pub mod pubsub_topic;
pub mod timestamp;
