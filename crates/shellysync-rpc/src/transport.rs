// Transport configuration for building reqwest::Client instances.
//
// Every session gets its own client so the configured timeout bounds the
// whole exchange (connect + request + response) for exactly one operation.

use std::time::Duration;

use crate::error::Error;

/// Transport settings for one RPC session.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: crate::channel::DEFAULT_RPC_TIMEOUT,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("shellysync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Transport)
    }
}
