use std::time::Duration;

use anyhow::{anyhow, Context};
use log::info;
use multiaddr::{Multiaddr, Protocol};

use waku_core::content_topic::ContentTopic;
use waku_core::pubsub_topic::PubsubTopic;
use waku_core::timestamp;
use waku_node::{Node, NodeConfigBuilder, WakuStoreConfigBuilder};
use waku_payload::{DecodedMessage, DecryptionKeyEntry};
use waku_store::{
    PageControl, PageDirection, QueryOptions, StoreConfig, TimeFilter, WakuStore,
    DEFAULT_PAGE_SIZE, PROTOCOL_ID,
};

use crate::config::WakuCliConf;

const STORE_PEER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, clap::Args)]
pub struct StoreQueryCmd {
    /// Store node multiaddr
    #[arg(long)]
    pub peer: Option<String>,
    /// Content topic to retrieve, repeatable
    #[arg(long = "content-topic")]
    pub content_topics: Vec<String>,
    #[arg(long)]
    pub pubsub_topic: Option<String>,
    #[arg(long)]
    pub page_size: Option<u64>,
    /// Retrieve the newest messages first
    #[arg(long)]
    pub backward: bool,
    /// Oldest sender timestamp, in nanoseconds
    #[arg(long)]
    pub start_time: Option<i64>,
    /// Newest sender timestamp, in nanoseconds
    #[arg(long)]
    pub end_time: Option<i64>,
    /// Hex encoded symmetric key, repeatable
    #[arg(long = "sym-key")]
    pub sym_keys: Vec<String>,
    /// Hex encoded secp256k1 private key, repeatable
    #[arg(long = "private-key")]
    pub private_keys: Vec<String>,
    /// Stop after printing this many messages
    #[arg(long)]
    pub limit: Option<usize>,
}

fn parse_hex_key(key: &str) -> anyhow::Result<Vec<u8>> {
    hex::decode(key.trim_start_matches("0x")).with_context(|| format!("invalid hex key: {key}"))
}

/// Both bounds are optional on the command line. A missing start is the epoch and a missing
/// end is now.
fn time_filter(start_time: Option<i64>, end_time: Option<i64>) -> Option<TimeFilter> {
    if start_time.is_none() && end_time.is_none() {
        return None;
    }

    Some(TimeFilter::new(
        start_time.unwrap_or(0),
        end_time.unwrap_or_else(timestamp::now),
    ))
}

fn print_message(message: &DecodedMessage) {
    let payload = match message.payload_as_utf8() {
        Some(text) => text.to_string(),
        None => hex::encode(&message.payload),
    };

    info!(
        "[{}] {}: {payload}",
        message.timestamp.unwrap_or_default(),
        message.content_topic
    );
}

pub async fn run_cmd(args: StoreQueryCmd, conf: WakuCliConf) -> anyhow::Result<()> {
    let peer_address: Multiaddr = args
        .peer
        .or(conf.store_peer.clone())
        .ok_or_else(|| anyhow!("no store peer given, use --peer or WAKU_STORE_PEER"))?
        .parse()?;

    let mut store_config = WakuStoreConfigBuilder::new();
    if let Some(timeout) = conf.request_timeout() {
        store_config.request_timeout(timeout);
    }

    let mut node_config = NodeConfigBuilder::new();
    if !conf.node_key.is_empty() {
        node_config.keypair_from_secp256k1(&parse_hex_key(&conf.node_key)?)?;
    }
    let node_config = node_config
        .with_keepalive(true)
        .with_waku_store(store_config.build())
        .build();

    let listen_address = Multiaddr::from(node_config.tcp_ipaddr)
        .with(Protocol::Tcp(node_config.tcp_port));

    let node = Node::new(node_config)?;
    info!("local peer id: {}", node.peer_id());

    node.switch_listen_on(&listen_address).await?;

    node.switch_dial(&peer_address).await?;
    let store_peer = node.wait_for_peer(PROTOCOL_ID, STORE_PEER_TIMEOUT).await?;
    info!("store peer: {}", store_peer.id);

    let store = WakuStore::with_config(
        node,
        StoreConfig {
            pubsub_topic: conf
                .pubsub_topic
                .map(PubsubTopic::new)
                .unwrap_or_default(),
            default_page_size: conf.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        },
    );

    let mut options = QueryOptions::default().with_peer(store_peer.id);
    if let Some(pubsub_topic) = args.pubsub_topic {
        options = options.with_pubsub_topic(pubsub_topic);
    }
    if let Some(page_size) = args.page_size {
        options = options.with_page_size(page_size);
    }
    if args.backward {
        options = options.with_direction(PageDirection::Backward);
    }
    if let Some(filter) = time_filter(args.start_time, args.end_time) {
        options = options.with_time_filter(filter);
    }
    for key in &args.sym_keys {
        options = options.with_decryption_key(DecryptionKeyEntry::symmetric(parse_hex_key(key)?));
    }
    for key in &args.private_keys {
        options = options.with_decryption_key(DecryptionKeyEntry::asymmetric(parse_hex_key(key)?));
    }

    let content_topics = args
        .content_topics
        .into_iter()
        .map(ContentTopic::new)
        .collect::<Vec<_>>();

    let limit = args.limit.unwrap_or(usize::MAX);
    let mut printed = 0;
    store
        .query_history_with(&content_topics, options, |page| {
            for message in page.iter().take(limit - printed) {
                print_message(message);
                printed += 1;
            }

            if printed < limit {
                PageControl::Continue
            } else {
                PageControl::Stop
            }
        })
        .await?;

    info!("retrieved {printed} messages");
    Ok(())
}
