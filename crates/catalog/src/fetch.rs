//! Catalog lookup with bounded exponential backoff.

use std::time::Duration;

use neo_config::CatalogConfig;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::record::RawObjectRecord;
use crate::transport::{CatalogTransport, HttpTransport, Sleeper, ThreadSleeper};

/// HTTP statuses that signal rate limiting or a server-side hiccup.
pub const TRANSIENT_STATUSES: &[u16] = &[429, 500, 502, 503, 504];

/// Successful transport outcome: either the object record or the catalog's own refusal.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogResponse {
    Found(RawObjectRecord),
    /// The catalog answered but reports the object removed or unknown.
    NotFound { message: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog returned HTTP {status} {reason} after {attempts} attempt(s)")]
    Http {
        status: u16,
        reason: String,
        attempts: u32,
    },
    #[error("catalog request failed after {attempts} attempt(s): {message}")]
    Network { message: String, attempts: u32 },
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl CatalogError {
    /// True when the catalog was reached but its payload could not be understood.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Retry schedule: `max_attempts` total requests, sleeping `base_delay * 2^attempt` between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: Duration::try_from_secs_f64(config.backoff_base_secs)
                .unwrap_or(Duration::ZERO),
        }
    }

    /// Delay to wait after the zero-based `attempt` failed.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Stateless catalog client; every call to [`CatalogFetcher::fetch`] is independent.
#[derive(Debug, Clone)]
pub struct CatalogFetcher<T = HttpTransport, S = ThreadSleeper> {
    transport: T,
    sleeper: S,
    policy: RetryPolicy,
}

impl CatalogFetcher {
    /// Production fetcher talking HTTP and sleeping on the current thread.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(
            HttpTransport::new(config)?,
            ThreadSleeper,
            RetryPolicy::from_config(config),
        ))
    }
}

impl<T: CatalogTransport, S: Sleeper> CatalogFetcher<T, S> {
    pub fn new(transport: T, sleeper: S, policy: RetryPolicy) -> Self {
        Self {
            transport,
            sleeper,
            policy: RetryPolicy {
                max_attempts: policy.max_attempts.max(1),
                ..policy
            },
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Look up `designation`, retrying transient failures per the configured policy.
    pub fn fetch(&self, designation: &str) -> Result<CatalogResponse, CatalogError> {
        let mut attempt = 0;
        loop {
            debug!(designation, attempt, "querying catalog");
            let outcome = self.transport.get(designation);
            let retryable = match &outcome {
                Ok(reply) => TRANSIENT_STATUSES.contains(&reply.status),
                Err(_) => true,
            };

            if retryable && attempt + 1 < self.policy.max_attempts {
                let delay = self.policy.delay_after(attempt);
                match &outcome {
                    Ok(reply) => warn!(
                        designation,
                        status = reply.status,
                        delay_s = delay.as_secs_f64(),
                        "transient catalog status, backing off"
                    ),
                    Err(failure) => warn!(
                        designation,
                        error = %failure,
                        delay_s = delay.as_secs_f64(),
                        "catalog request failed, backing off"
                    ),
                }
                self.sleeper.sleep(delay);
                attempt += 1;
                continue;
            }

            let attempts = attempt + 1;
            return match outcome {
                Err(failure) => Err(CatalogError::Network {
                    message: failure.0,
                    attempts,
                }),
                Ok(reply) if reply.is_success() => decode(&reply.body),
                Ok(reply) => Err(CatalogError::Http {
                    status: reply.status,
                    reason: reply.reason,
                    attempts,
                }),
            };
        }
    }
}

/// Decode a catalog body, separating the catalog's own error payloads from object records.
pub fn decode(body: &str) -> Result<CatalogResponse, CatalogError> {
    let value: Value = serde_json::from_str(body)?;
    if let Some(error) = value.get("error") {
        let message = match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        return Ok(CatalogResponse::NotFound { message });
    }
    Ok(CatalogResponse::Found(serde_json::from_value::<RawObjectRecord>(
        value,
    )?))
}
