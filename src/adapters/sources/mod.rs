//! Protocol Source Adapters - Fetch and Normalize Upstream Yields
//!
//! One adapter per protocol, each pairing an HTTP fetch with a pure
//! normalization function over the raw JSON payload. The normalization
//! functions are exported separately so they can be tested and
//! benchmarked without a network.
//!
//! Sub-modules:
//! - `curve`: pool list at `data.poolList`, APY taken as-is
//! - `aave`: reserve list at `reserves`, per-second rate compounded daily

pub mod aave;
pub mod curve;

pub use aave::AaveSource;
pub use curve::CurveSource;

use serde_json::Value;

use crate::domain::record::Protocol;

/// What to do with a list entry that cannot be normalized.
///
/// Upstream data is heterogeneous and partial coverage is expected, so
/// dropping entries silently is the default. `Warn` exists for
/// operators who want skips visible in the logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkipPolicy {
    /// Drop the entry without a trace.
    #[default]
    Silent,
    /// Drop the entry and log a warning with its index.
    Warn,
}

/// Record a skipped entry according to the active policy.
pub(crate) fn note_skip(policy: SkipPolicy, protocol: Protocol, index: usize) {
    if policy == SkipPolicy::Warn {
        tracing::warn!(
            protocol = %protocol,
            index,
            "entry missing required fields, skipped"
        );
    }
}

/// Coerce a JSON value to `f64`, accepting numbers and numeric strings.
///
/// Upstreams are inconsistent about quoting numeric fields; both
/// `"2.5"` and `2.5` must parse. Anything else is `None`.
pub(crate) fn numeric_field(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
