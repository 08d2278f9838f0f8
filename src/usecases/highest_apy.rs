//! Highest-APY Aggregation - The Core Request Workflow
//!
//! Fetches every configured yield source concurrently, concatenates the
//! normalized records in source order, and selects the single highest
//! yield. There is exactly one implementation of this workflow; how the
//! fetches are scheduled is a transport detail that never changes the
//! output.

use std::sync::Arc;

use futures_util::future::try_join_all;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::record::YieldRecord;
use crate::domain::select::{select_highest, EmptyResultError};
use crate::ports::yield_source::{SourceError, YieldSource};

/// Failure modes of the aggregation workflow.
#[derive(Debug, Error)]
pub enum HighestApyError {
    /// A source failed outright (malformed shape or transport). Any
    /// source failing aborts the whole aggregation rather than
    /// silently reporting a partial market.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// All sources answered but nothing survived normalization.
    #[error(transparent)]
    NoData(#[from] EmptyResultError),
}

/// Aggregates yields across sources and picks the maximum.
///
/// Sources are queried in the order given at construction; that order
/// also fixes the concatenation order and therefore the tie-break.
pub struct HighestApy {
    sources: Vec<Arc<dyn YieldSource>>,
}

impl HighestApy {
    /// Create the use case over an ordered set of sources.
    pub fn new(sources: Vec<Arc<dyn YieldSource>>) -> Self {
        Self { sources }
    }

    /// Fetch all sources concurrently and return the top record.
    pub async fn execute(&self) -> Result<YieldRecord, HighestApyError> {
        let batches =
            try_join_all(self.sources.iter().map(|source| source.fetch_yields())).await?;

        for (source, batch) in self.sources.iter().zip(&batches) {
            debug!(
                protocol = %source.protocol(),
                records = batch.len(),
                "Source normalized"
            );
        }

        // try_join_all preserves input order, so Curve records precede
        // Aave records regardless of which fetch finished first.
        let records: Vec<YieldRecord> = batches.into_iter().flatten().collect();

        let best = select_highest(records)?;
        info!(
            protocol = %best.protocol,
            pool = %best.pool,
            apy = best.apy,
            "Highest yield selected"
        );
        Ok(best)
    }
}
