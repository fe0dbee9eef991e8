use std::net::IpAddr;

use libp2p::identity::{secp256k1, Keypair};

use crate::config::config::NodeConfig;
use crate::config::waku_store_config::WakuStoreConfig;

#[derive(Debug, Default)]
pub struct NodeConfigBuilder {
    config: NodeConfig,
}

impl NodeConfigBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn build(&mut self) -> NodeConfig {
        self.config.clone()
    }

    pub fn keypair(&mut self, keypair: Keypair) -> &mut Self {
        self.config.keypair = keypair;
        self
    }

    pub fn keypair_from_secp256k1(&mut self, bytes: &[u8]) -> anyhow::Result<&mut Self> {
        let secret_key = secp256k1::SecretKey::try_from_bytes(bytes.to_vec())?;
        self.config.keypair = secp256k1::Keypair::from(secret_key).into();
        Ok(self)
    }

    pub fn tcp(&mut self, address: IpAddr, port: u16) -> &mut Self {
        self.config.tcp_ipaddr = address;
        self.config.tcp_port = port;
        self
    }

    pub fn with_keepalive(&mut self, keepalive: bool) -> &mut Self {
        self.config.keepalive = keepalive;
        self
    }

    pub fn with_waku_store(&mut self, config: WakuStoreConfig) -> &mut Self {
        self.config.store = Some(config);
        self
    }
}
