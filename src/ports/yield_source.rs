//! Yield Source Port - Normalized Protocol Yield Interface
//!
//! Defines the trait for fetching yield data from a DeFi protocol and
//! the error contract adapters report through. Each implementor owns
//! its transport and returns records already normalized to
//! `YieldRecord`, so the aggregation logic never sees raw payloads.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::record::{Protocol, YieldRecord};

/// Failure modes a yield source can report.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The upstream answered, but the expected top-level collection is
    /// missing or not a list. The response cannot be normalized at all.
    #[error("{protocol} response is missing the `{path}` collection")]
    DataShape {
        /// Protocol whose response was malformed.
        protocol: Protocol,
        /// Dotted path of the missing collection.
        path: &'static str,
    },

    /// Transport or decode failure from the HTTP client.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Trait for protocol yield providers.
///
/// Implementors fetch one protocol's raw payload and normalize it into
/// a sequence of `YieldRecord`s. Fetches across sources are independent
/// (no shared mutable state), so callers may run them concurrently or
/// sequentially without changing the result.
#[async_trait]
pub trait YieldSource: Send + Sync {
    /// Protocol this source reports for.
    fn protocol(&self) -> Protocol;

    /// Fetch the upstream payload and normalize it.
    ///
    /// Entries missing required fields are dropped, never surfaced as
    /// errors; a missing top-level collection is `SourceError::DataShape`.
    async fn fetch_yields(&self) -> Result<Vec<YieldRecord>, SourceError>;
}
