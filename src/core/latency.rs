use std::time::Duration;

use crate::core::config::StoreConfig;

/// Delay inserted before every repository operation to mimic a remote backend
#[derive(Debug, Clone)]
pub struct Latency {
    config: StoreConfig,
}

impl Latency {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn instant() -> Self {
        Self::new(StoreConfig::instant())
    }

    pub async fn wait(&self, base: Duration) {
        let delay = self.config.delay_for(base);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
