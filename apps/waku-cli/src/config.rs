use std::time::Duration;

use config::{builder::DefaultState, Config, ConfigBuilder};

/// Settings read from the configuration file and the `WAKU_` environment variables.
///
/// Command line arguments take precedence over these.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct WakuCliConf {
    /// Hex encoded secp256k1 key of the node identity. A random one is used when empty.
    #[serde(default)]
    pub node_key: String,
    /// Store node multiaddr, used when `--peer` is not given.
    #[serde(default)]
    pub store_peer: Option<String>,
    #[serde(default)]
    pub pubsub_topic: Option<String>,
    #[serde(default)]
    pub page_size: Option<u64>,
    /// Seconds to wait for a single store response.
    #[serde(default)]
    pub request_timeout: Option<u64>,
}

impl WakuCliConf {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }
}

fn deserialize(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<WakuCliConf> {
    let conf = builder.build()?.try_deserialize::<WakuCliConf>()?;
    Ok(conf)
}

pub fn load(config_file: Option<&str>) -> anyhow::Result<WakuCliConf> {
    let mut conf_builder = Config::builder();
    if let Some(config_file) = config_file {
        conf_builder =
            conf_builder.add_source(config::File::with_name(config_file).required(false));
    }
    conf_builder = conf_builder.add_source(
        config::Environment::with_prefix("WAKU")
            .ignore_empty(true)
            .prefix_separator("_")
            .separator("__"),
    );

    deserialize(conf_builder)
}
