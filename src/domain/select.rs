//! Maximum-yield selection over normalized records.

use std::cmp::Ordering;

use thiserror::Error;

use super::record::YieldRecord;

/// No source contributed a usable record, so there is no maximum to pick.
///
/// Distinct from a malformed upstream response: every source answered
/// with a well-shaped payload, but nothing in it survived normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no usable yield records from any source")]
pub struct EmptyResultError;

/// Select the record with the highest APY.
///
/// Comparison uses `f64::total_cmp`, so the ordering is total even
/// though adapters only ever emit finite values. Ties keep the first
/// record in sequence order, which makes selection deterministic for a
/// fixed concatenation order (Curve records precede Aave records in the
/// default composition).
pub fn select_highest(records: Vec<YieldRecord>) -> Result<YieldRecord, EmptyResultError> {
    let mut records = records.into_iter();
    let first = records.next().ok_or(EmptyResultError)?;
    Ok(records.fold(first, |best, candidate| {
        if candidate.apy.total_cmp(&best.apy) == Ordering::Greater {
            candidate
        } else {
            best
        }
    }))
}
