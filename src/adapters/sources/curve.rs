//! Curve Source Adapter - Pool Registry Yields
//!
//! Fetches Curve's pool-list endpoint and normalizes each pool into a
//! `YieldRecord`. Despite the `latestDailyApy` field name, the upstream
//! figure is already annualized, so it is taken as-is with no
//! compounding transform.

use reqwest::Client;
use serde_json::Value;

use crate::domain::record::{Protocol, YieldRecord};
use crate::ports::yield_source::{SourceError, YieldSource};

use super::{note_skip, numeric_field, SkipPolicy};

/// Yield source backed by Curve's pool-list API.
pub struct CurveSource {
    /// Shared HTTP client (timeout configured at construction).
    http: Client,
    /// Full URL of the pool-list endpoint.
    url: String,
    /// Policy for entries that fail to normalize.
    policy: SkipPolicy,
}

impl CurveSource {
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
impl YieldSource for CurveSource {
    fn protocol(&self) -> Protocol {
        Protocol::Curve
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
        normalize_curve(&raw, self.policy)
    }
}

/// Normalize a raw Curve pool-list response.
///
/// The payload must carry a list at `data.poolList`; anything else is a
/// `SourceError::DataShape`. Each pool needs a non-empty `address` and
/// a numeric `latestDailyApy` (number or numeric string); pools missing
/// either are skipped per `policy`. Pure, no I/O.
pub fn normalize_curve(raw: &Value, policy: SkipPolicy) -> Result<Vec<YieldRecord>, SourceError> {
    let pools = raw
        .get("data")
        .and_then(|data| data.get("poolList"))
        .and_then(Value::as_array)
        .ok_or(SourceError::DataShape {
            protocol: Protocol::Curve,
            path: "data.poolList",
        })?;

    let mut records = Vec::with_capacity(pools.len());
    for (index, pool) in pools.iter().enumerate() {
        let address = pool
            .get("address")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty());
        let apy = pool
            .get("latestDailyApy")
            .and_then(numeric_field)
            .filter(|apy| apy.is_finite());

        match (address, apy) {
            (Some(address), Some(apy)) => records.push(YieldRecord {
                protocol: Protocol::Curve,
                pool: address.to_string(),
                apy,
            }),
            _ => note_skip(policy, Protocol::Curve, index),
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_a_single_pool() {
        let raw = json!({"data": {"poolList": [
            {"address": "3pool", "latestDailyApy": "2.5"}
        ]}});
        let records = normalize_curve(&raw, SkipPolicy::Silent).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].protocol, Protocol::Curve);
        assert_eq!(records[0].pool, "3pool");
        assert!((records[0].apy - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_unquoted_numeric_apy() {
        let raw = json!({"data": {"poolList": [
            {"address": "fraxusdc", "latestDailyApy": 0.011}
        ]}});
        let records = normalize_curve(&raw, SkipPolicy::Silent).unwrap();
        assert_eq!(records.len(), 1);
        assert!((records[0].apy - 0.011).abs() < f64::EPSILON);
    }

    #[test]
    fn skips_pools_missing_either_field() {
        let raw = json!({"data": {"poolList": [
            {"address": "no-apy"},
            {"latestDailyApy": "1.0"},
            {"address": "ok", "latestDailyApy": "0.5"}
        ]}});
        let records = normalize_curve(&raw, SkipPolicy::Silent).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pool, "ok");
    }

    #[test]
    fn skips_non_numeric_apy_and_empty_address() {
        let raw = json!({"data": {"poolList": [
            {"address": "junk-apy", "latestDailyApy": "soon"},
            {"address": "", "latestDailyApy": "0.2"}
        ]}});
        let records = normalize_curve(&raw, SkipPolicy::Silent).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn empty_pool_list_is_not_an_error() {
        let raw = json!({"data": {"poolList": []}});
        let records = normalize_curve(&raw, SkipPolicy::Silent).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_top_level_path_is_a_shape_error() {
        for raw in [json!({}), json!({"data": {}}), json!({"data": {"poolList": "nope"}})] {
            let err = normalize_curve(&raw, SkipPolicy::Silent).unwrap_err();
            assert!(matches!(
                err,
                SourceError::DataShape {
                    protocol: Protocol::Curve,
                    path: "data.poolList"
                }
            ));
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = json!({"data": {"poolList": [
            {"address": "3pool", "latestDailyApy": "2.5"},
            {"address": "steth", "latestDailyApy": 0.042}
        ]}});
        let first = normalize_curve(&raw, SkipPolicy::Silent).unwrap();
        let second = normalize_curve(&raw, SkipPolicy::Silent).unwrap();
        assert_eq!(first, second);
    }
}
