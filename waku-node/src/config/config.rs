use std::net::{IpAddr, Ipv4Addr};

use libp2p::identity::Keypair;

use crate::config::waku_store_config::WakuStoreConfig;

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub keypair: Keypair,
    pub tcp_ipaddr: IpAddr,
    pub tcp_port: u16,
    pub keepalive: bool,
    /// Store protocol client, disabled when `None`.
    pub store: Option<WakuStoreConfig>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            keypair: Keypair::generate_secp256k1(),
            tcp_ipaddr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            tcp_port: 0,
            keepalive: false,
            store: None,
        }
    }
}
