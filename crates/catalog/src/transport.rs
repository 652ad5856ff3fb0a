//! Seams between the retry loop and the outside world.

use std::time::Duration;

use neo_config::CatalogConfig;
use reqwest::blocking::Client;
use thiserror::Error;

/// Raw HTTP reply from one catalog request.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogReply {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl CatalogReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A request that never produced an HTTP status (DNS, connect, timeout, body read).
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportFailure(pub String);

/// Issues exactly one lookup request per call.
pub trait CatalogTransport {
    fn get(&self, designation: &str) -> Result<CatalogReply, TransportFailure>;
}

/// Blocks the calling thread between retry attempts.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Blocking `reqwest` transport against the configured catalog endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &CatalogConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl CatalogTransport for HttpTransport {
    fn get(&self, designation: &str) -> Result<CatalogReply, TransportFailure> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("des", designation)])
            .send()
            .map_err(|err| TransportFailure(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|err| TransportFailure(err.to_string()))?;
        Ok(CatalogReply {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
