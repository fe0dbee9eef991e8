//! Waku pubsub topic.
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The pubsub topic all Waku v2 nodes join unless configured otherwise.
pub const DEFAULT_PUBSUB_TOPIC: &str = "/waku/2/default-waku/proto";

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct PubsubTopic(String);

impl PubsubTopic {
    /// Creates a new PubsubTopic from a string.
    pub fn new<S>(topic: S) -> PubsubTopic
    where
        S: Into<String>,
    {
        PubsubTopic(topic.into())
    }

    /// Extracts a string slice containing the entire topic.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PubsubTopic {
    fn default() -> Self {
        Self::new(DEFAULT_PUBSUB_TOPIC)
    }
}

impl fmt::Debug for PubsubTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for PubsubTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PubsubTopic {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(String::from(s)))
    }
}

impl From<&str> for PubsubTopic {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for PubsubTopic {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<PubsubTopic> for String {
    fn from(topic: PubsubTopic) -> Self {
        topic.0
    }
}

impl AsRef<str> for PubsubTopic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
