//! Aave Source Adapter - Lending Reserve Yields
//!
//! Fetches Aave's reserve endpoint and normalizes each reserve into a
//! `YieldRecord`. The upstream reports `interestPerSecond` as a decimal
//! string; the published APY is derived by daily compounding of that
//! rate (see `domain::apy`).

use reqwest::Client;
use serde_json::Value;

use crate::domain::apy::annualize_daily;
use crate::domain::record::{Protocol, YieldRecord};
use crate::ports::yield_source::{SourceError, YieldSource};

use super::{note_skip, numeric_field, SkipPolicy};

/// Yield source backed by Aave's reserve API.
pub struct AaveSource {
    /// Shared HTTP client (timeout configured at construction).
    http: Client,
    /// Full URL of the reserves endpoint.
    url: String,
    /// Policy for entries that fail to normalize.
    policy: SkipPolicy,
}

impl AaveSource {
    /// Create a source for the given endpoint URL.
    pub fn new(http: Client, url: String) -> Self {
        Self {
            http,
            url,
            policy: SkipPolicy::default(),
        }
    }
}

#[async_trait::async_trait]
impl YieldSource for AaveSource {
    fn protocol(&self) -> Protocol {
        Protocol::Aave
    }

    async fn fetch_yields(&self) -> Result<Vec<YieldRecord>, SourceError> {
        let raw: Value = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        normalize_aave(&raw, self.policy)
    }
}

/// Normalize a raw Aave reserves response.
///
/// The payload must carry a list at `reserves`; anything else is a
/// `SourceError::DataShape`. Each reserve needs a non-empty `symbol`
/// and a numeric `interestPerSecond` (a non-numeric rate string counts
/// as missing). Reserves whose annualized rate is not finite are
/// dropped as well. Pure, no I/O.
pub fn normalize_aave(raw: &Value, policy: SkipPolicy) -> Result<Vec<YieldRecord>, SourceError> {
    let reserves = raw
        .get("reserves")
        .and_then(Value::as_array)
        .ok_or(SourceError::DataShape {
            protocol: Protocol::Aave,
            path: "reserves",
        })?;

    let mut records = Vec::with_capacity(reserves.len());
    for (index, reserve) in reserves.iter().enumerate() {
        let symbol = reserve
            .get("symbol")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty());
        let apy = reserve
            .get("interestPerSecond")
            .and_then(numeric_field)
            .map(annualize_daily)
            .filter(|apy| apy.is_finite());

        match (symbol, apy) {
            (Some(symbol), Some(apy)) => records.push(YieldRecord {
                protocol: Protocol::Aave,
                pool: symbol.to_string(),
                apy,
            }),
            _ => note_skip(policy, Protocol::Aave, index),
        }
    }

    Ok(records)
}
