//! Waku content topic.
//!
//! Content topics follow the [23/WAKU2-TOPICS](https://rfc.vac.dev/spec/23/) naming
//! recommendation: `/{application-name}/{version}/{content-topic-name}/{encoding}`. Topics
//! not following that layout are still valid, they just don't expose their parts.
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct ContentTopic(String);

impl ContentTopic {
    pub fn new<S>(topic: S) -> ContentTopic
    where
        S: Into<String>,
    {
        ContentTopic(topic.into())
    }

    /// Extracts a string slice containing the entire content topic.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the length in bytes of this content topic.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the content topic is an empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The application name, when the topic follows the recommended naming.
    pub fn application(&self) -> Option<&str> {
        self.parts().map(|[application, ..]| application)
    }

    /// The encoding suffix (e.g. `proto`, `utf8`), when the topic follows the recommended
    /// naming.
    pub fn encoding(&self) -> Option<&str> {
        self.parts().map(|[.., encoding]| encoding)
    }

    fn parts(&self) -> Option<[&str; 4]> {
        let mut parts = self.0.strip_prefix('/')?.split('/');

        let application = parts.next().filter(|s| !s.is_empty())?;
        let version = parts.next().filter(|s| !s.is_empty())?;
        let name = parts.next().filter(|s| !s.is_empty())?;
        let encoding = parts.next().filter(|s| !s.is_empty())?;
        if parts.next().is_some() {
            return None;
        }

        Some([application, version, name, encoding])
    }
}

impl fmt::Debug for ContentTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for ContentTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ContentTopic {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for ContentTopic {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ContentTopic {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<ContentTopic> for String {
    fn from(topic: ContentTopic) -> Self {
        topic.0
    }
}

impl AsRef<str> for ContentTopic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ContentTopic {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ContentTopic {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
