//! Impact-monitoring catalog client.
//!
//! Looks up one object per call by designation and hands back a typed
//! [`RawObjectRecord`]. Transient HTTP failures are retried with exponential
//! backoff; the HTTP layer and the wall-clock sleep are both injectable so the
//! retry loop can be driven without a network.

pub mod fetch;
pub mod record;
pub mod transport;

pub use fetch::{CatalogError, CatalogFetcher, CatalogResponse, RetryPolicy, TRANSIENT_STATUSES};
pub use record::{RawApproach, RawObjectRecord, RawSummary};
pub use transport::{
    CatalogReply, CatalogTransport, HttpTransport, Sleeper, ThreadSleeper, TransportFailure,
};
