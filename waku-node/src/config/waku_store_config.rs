use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WakuStoreConfig {
    /// Time to wait for a store node to answer a single history request.
    pub request_timeout: Duration,
}

impl Default for WakuStoreConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Default)]
pub struct WakuStoreConfigBuilder {
    config: WakuStoreConfig,
}

impl WakuStoreConfigBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn build(&self) -> WakuStoreConfig {
        self.config.clone()
    }

    pub fn request_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.config.request_timeout = timeout;
        self
    }
}
