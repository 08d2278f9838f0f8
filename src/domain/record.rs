//! Core yield domain types.
//!
//! Defines the normalized record every source adapter emits and the
//! protocol tag identifying where a record came from. These types are
//! the only currency between adapters, the aggregator, and the API.

use serde::{Deserialize, Serialize};

/// Supported yield sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    /// Curve pool registry (pools keyed by on-chain address).
    Curve,
    /// Aave lending markets (reserves keyed by asset symbol).
    Aave,
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Curve => write!(f, "Curve"),
            Self::Aave => write!(f, "Aave"),
        }
    }
}

/// A single normalized yield observation.
///
/// `apy` is an annualized rate expressed as a fraction (0.05 = 5%) and
/// is always finite; `pool` is never empty. Records are built fresh per
/// request and discarded after the response is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldRecord {
    /// Source protocol this record was normalized from.
    pub protocol: Protocol,
    /// Pool address (Curve) or reserve symbol (Aave).
    pub pool: String,
    /// Annualized yield as a fraction.
    pub apy: f64,
}
