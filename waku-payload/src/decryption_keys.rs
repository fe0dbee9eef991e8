use std::collections::HashSet;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, PoisonError, RwLock};

use bytes::Bytes;

use waku_core::content_topic::ContentTopic;

use crate::version_1::{self, CryptoError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecryptionMethod {
    Symmetric,
    Asymmetric,
}

/// The content topics a decryption key is tried for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeyScope {
    #[default]
    All,
    ContentTopics(HashSet<ContentTopic>),
}

impl KeyScope {
    pub fn content_topics<I, T>(topics: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ContentTopic>,
    {
        Self::ContentTopics(topics.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, content_topic: &ContentTopic) -> bool {
        match self {
            KeyScope::All => true,
            KeyScope::ContentTopics(topics) => topics.contains(content_topic),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct DecryptionKeyEntry {
    pub key: Bytes,
    pub method: DecryptionMethod,
    pub scope: KeyScope,
}

impl DecryptionKeyEntry {
    pub fn new(key: impl Into<Bytes>, method: DecryptionMethod) -> Self {
        Self {
            key: key.into(),
            method,
            scope: KeyScope::All,
        }
    }

    pub fn symmetric(key: impl Into<Bytes>) -> Self {
        Self::new(key, DecryptionMethod::Symmetric)
    }

    pub fn asymmetric(private_key: impl Into<Bytes>) -> Self {
        Self::new(private_key, DecryptionMethod::Asymmetric)
    }

    pub fn with_scope(mut self, scope: KeyScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn applies_to(&self, content_topic: &ContentTopic) -> bool {
        self.scope.matches(content_topic)
    }

    pub(crate) fn decrypt(&self, payload: &[u8]) -> Result<Bytes, CryptoError> {
        match self.method {
            DecryptionMethod::Symmetric => version_1::decrypt_symmetric(payload, &self.key),
            DecryptionMethod::Asymmetric => version_1::decrypt_asymmetric(payload, &self.key),
        }
    }
}

impl Debug for DecryptionKeyEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecryptionKeyEntry")
            .field("key", &"<redacted>")
            .field("method", &self.method)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Ordered set of decryption keys.
///
/// Entries are tried in registration order. Mutations replace the whole entry list, so a
/// [`snapshot`](Self::snapshot) taken by an in-flight query is never affected by a concurrent
/// `add` or `remove`. Clones share the same underlying list.
#[derive(Clone)]
pub struct DecryptionKeyRegistry {
    entries: Arc<RwLock<Arc<[DecryptionKeyEntry]>>>,
}

impl Default for DecryptionKeyRegistry {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Arc::from(Vec::new()))),
        }
    }
}

impl Debug for DecryptionKeyRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.snapshot().iter()).finish()
    }
}

impl DecryptionKeyRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add(&self, entry: DecryptionKeyEntry) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        let mut updated = entries.to_vec();
        updated.push(entry);
        *entries = updated.into();
    }

    pub fn add_key(&self, key: impl Into<Bytes>, method: DecryptionMethod, scope: KeyScope) {
        self.add(DecryptionKeyEntry::new(key, method).with_scope(scope));
    }

    /// Remove every entry holding the given key material. Returns the number of entries
    /// removed.
    pub fn remove(&self, key: &[u8]) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        let updated = entries
            .iter()
            .filter(|entry| entry.key != key)
            .cloned()
            .collect::<Vec<_>>();
        let removed = entries.len() - updated.len();
        if removed > 0 {
            *entries = updated.into();
        }

        removed
    }

    /// An immutable view of the current entries, in registration order.
    pub fn snapshot(&self) -> Arc<[DecryptionKeyEntry]> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The entries applying to the given content topic, in registration order.
    pub fn resolve(&self, content_topic: &ContentTopic) -> Vec<DecryptionKeyEntry> {
        self.snapshot()
            .iter()
            .filter(|entry| entry.applies_to(content_topic))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
