use std::borrow::Cow;

use bytes::Bytes;
use libp2p::PeerId;
use log::{debug, trace, warn};
use uuid::Uuid;

use waku_core::content_topic::ContentTopic;
use waku_core::pubsub_topic::PubsubTopic;
use waku_payload::{
    decode, DecodedMessage, DecryptionKeyEntry, DecryptionKeyRegistry, DecryptionMethod, KeyScope,
};

use crate::error::StoreError;
use crate::pagination::{PageControl, PageDirection, PagingInfo, DEFAULT_PAGE_SIZE};
use crate::peer::{select_peer, Peer};
use crate::protocol::PROTOCOL_ID;
use crate::request::{HistoryQuery, HistoryRequest, TimeFilter};
use crate::rpc;
use crate::transport::StoreTransport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Pubsub topic queried when the query options don't name one.
    pub pubsub_topic: PubsubTopic,
    pub default_page_size: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            pubsub_topic: PubsubTopic::default(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub peer_id: Option<PeerId>,
    pub pubsub_topic: Option<PubsubTopic>,
    /// `None` or zero selects the configured default page size.
    pub page_size: Option<u64>,
    pub page_direction: PageDirection,
    pub time_filter: Option<TimeFilter>,
    /// Tried after the store's registered keys, for this query only.
    pub decryption_keys: Vec<DecryptionKeyEntry>,
}

impl QueryOptions {
    pub fn with_peer(mut self, peer_id: PeerId) -> Self {
        self.peer_id = Some(peer_id);
        self
    }

    pub fn with_pubsub_topic(mut self, pubsub_topic: impl Into<PubsubTopic>) -> Self {
        self.pubsub_topic = Some(pubsub_topic.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_direction(mut self, direction: PageDirection) -> Self {
        self.page_direction = direction;
        self
    }

    pub fn with_time_filter(mut self, time_filter: TimeFilter) -> Self {
        self.time_filter = Some(time_filter);
        self
    }

    pub fn with_decryption_key(mut self, entry: DecryptionKeyEntry) -> Self {
        self.decryption_keys.push(entry);
        self
    }
}

/// Store protocol client.
///
/// Queries run against a peer reachable through the [`StoreTransport`]. Retrieved messages
/// are decoded with the store's [`DecryptionKeyRegistry`]; messages no key opens are
/// dropped.
pub struct WakuStore<T> {
    transport: T,
    config: StoreConfig,
    decryption_keys: DecryptionKeyRegistry,
}

impl<T: StoreTransport> WakuStore<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, StoreConfig::default())
    }

    pub fn with_config(transport: T, config: StoreConfig) -> Self {
        Self {
            transport,
            config,
            decryption_keys: DecryptionKeyRegistry::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn decryption_keys(&self) -> &DecryptionKeyRegistry {
        &self.decryption_keys
    }

    /// Register a key for all subsequent page decodes, including those of queries already
    /// running.
    pub fn add_decryption_key(
        &self,
        key: impl Into<Bytes>,
        method: DecryptionMethod,
        scope: KeyScope,
    ) {
        self.decryption_keys.add_key(key, method, scope);
    }

    pub fn remove_decryption_key(&self, key: &[u8]) -> usize {
        self.decryption_keys.remove(key)
    }

    /// Connected peers serving the store protocol.
    pub async fn peers(&self) -> Vec<Peer> {
        self.transport
            .connected_peers()
            .await
            .into_iter()
            .filter(Peer::is_store_node)
            .collect()
    }

    /// Start a query, returning a lazy cursor over its pages.
    ///
    /// No request is sent until the first call to [`HistoryPages::next_page`].
    pub async fn pages(
        &self,
        content_topics: &[ContentTopic],
        options: QueryOptions,
    ) -> Result<HistoryPages<'_, T>, StoreError> {
        let peers = self.transport.connected_peers().await;
        let peer_id = select_peer(&peers, options.peer_id.as_ref())
            .map(|peer| peer.id)
            .ok_or(StoreError::NoPeerAvailable)?;

        let page_size = options
            .page_size
            .filter(|size| *size > 0)
            .unwrap_or(self.config.default_page_size);

        let request = HistoryRequest {
            request_id: Uuid::new_v4().to_string(),
            query: HistoryQuery {
                pubsub_topic: Some(
                    options
                        .pubsub_topic
                        .unwrap_or_else(|| self.config.pubsub_topic.clone()),
                ),
                content_topics: content_topics.to_vec(),
                time_filter: options.time_filter,
                paging_info: PagingInfo {
                    page_size,
                    direction: options.page_direction,
                    cursor: None,
                },
            },
        };

        debug!(
            "store query {} to {peer_id}: {:?}",
            request.request_id, request.query
        );

        Ok(HistoryPages {
            store: self,
            peer_id,
            request,
            extra_keys: options.decryption_keys,
            round_trips: 0,
            exhausted: false,
        })
    }

    /// Retrieve every page of the query and return the decoded messages.
    ///
    /// With a [`PageDirection::Forward`] query the messages come oldest first. With a
    /// backward query the newest page is fetched first, each page keeping its own order.
    pub async fn query_history(
        &self,
        content_topics: &[ContentTopic],
        options: QueryOptions,
    ) -> Result<Vec<DecodedMessage>, StoreError> {
        let mut pages = self.pages(content_topics, options).await?;

        let mut messages = Vec::new();
        while let Some(page) = pages.next_page().await? {
            messages.extend(page);
        }

        Ok(messages)
    }

    /// Hand each decoded page over to `on_page` as soon as it arrives.
    ///
    /// A page is empty when the store node sent messages but none of them could be decoded.
    /// Returning [`PageControl::Stop`] ends the query without sending another request. On
    /// error, the pages already delivered stay delivered.
    pub async fn query_history_with<F>(
        &self,
        content_topics: &[ContentTopic],
        options: QueryOptions,
        mut on_page: F,
    ) -> Result<(), StoreError>
    where
        F: FnMut(Vec<DecodedMessage>) -> PageControl,
    {
        let mut pages = self.pages(content_topics, options).await?;

        while let Some(page) = pages.next_page().await? {
            if on_page(page) == PageControl::Stop {
                debug!(
                    "store query {} stopped by the caller after {} round trips",
                    pages.request_id(),
                    pages.round_trips()
                );
                break;
            }
        }

        Ok(())
    }
}

/// The pages of one logical query, fetched one round trip at a time.
///
/// Every request of the query carries the same request id and filters; only the cursor
/// changes. Once a page is empty, the cursor stops moving or an error occurs, the query is
/// over and [`next_page`](Self::next_page) keeps returning `Ok(None)`.
pub struct HistoryPages<'a, T> {
    store: &'a WakuStore<T>,
    peer_id: PeerId,
    request: HistoryRequest,
    extra_keys: Vec<DecryptionKeyEntry>,
    round_trips: usize,
    exhausted: bool,
}

impl<'a, T: StoreTransport> HistoryPages<'a, T> {
    pub fn peer_id(&self) -> &PeerId {
        &self.peer_id
    }

    pub fn request_id(&self) -> &str {
        &self.request.request_id
    }

    /// Number of responses received so far.
    pub fn round_trips(&self) -> usize {
        self.round_trips
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Fetch and decode the next page.
    ///
    /// The returned page can be empty when the store node sent messages but none of them
    /// could be decoded.
    pub async fn next_page(&mut self) -> Result<Option<Vec<DecodedMessage>>, StoreError> {
        if self.exhausted {
            return Ok(None);
        }

        let page = self.fetch_page().await;
        if page.is_err() {
            self.exhausted = true;
        }
        page
    }

    async fn fetch_page(&mut self) -> Result<Option<Vec<DecodedMessage>>, StoreError> {
        trace!(
            "store query {}: requesting page {} from {}",
            self.request.request_id,
            self.round_trips + 1,
            self.peer_id
        );

        let request = rpc::encode_request(self.request.clone());
        let response = self
            .store
            .transport
            .send_request(&self.peer_id, PROTOCOL_ID, request)
            .await?;
        self.round_trips += 1;

        let response = rpc::decode_response(&response)?;
        if response.request_id != self.request.request_id {
            warn!(
                "store query {}: response carries request id {}",
                self.request.request_id, response.request_id
            );
        }

        let body = response.result?;
        if body.messages.is_empty() {
            debug!(
                "store query {}: no more messages after {} round trips",
                self.request.request_id, self.round_trips
            );
            self.exhausted = true;
            return Ok(None);
        }

        let paging_info = &mut self.request.query.paging_info;
        match body.next_page() {
            Some(cursor) if paging_info.cursor.as_ref() != Some(cursor) => {
                paging_info.cursor = Some(cursor.clone());
            }
            _ => self.exhausted = true,
        }

        let snapshot = self.store.decryption_keys.snapshot();
        let keys: Cow<[DecryptionKeyEntry]> = if self.extra_keys.is_empty() {
            Cow::Borrowed(&snapshot[..])
        } else {
            Cow::Owned(
                snapshot
                    .iter()
                    .chain(&self.extra_keys)
                    .cloned()
                    .collect(),
            )
        };

        let received = body.messages.len();
        let page = body
            .messages
            .iter()
            .filter_map(|message| decode(message, &keys))
            .collect::<Vec<_>>();

        trace!(
            "store query {}: page {} decoded {}/{received} messages",
            self.request.request_id,
            self.round_trips,
            page.len()
        );

        Ok(Some(page))
    }
}
