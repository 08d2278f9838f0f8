//! Annualization math for upstream interest rates.
//!
//! Aave reports a per-second rate; the published APY figures are derived
//! by splitting that rate over 365 periods and compounding daily. The
//! formula is kept bit-for-bit compatible with the numbers the upstream
//! dashboards show, so the divisor and exponent are both 365 rather than
//! a seconds-per-year conversion.

/// Compounding periods per year.
pub const PERIODS_PER_YEAR: f64 = 365.0;

/// Annualize a rate by daily compounding: `(1 + r/365)^365 - 1`.
///
/// A zero rate annualizes to exactly zero. The result is not guaranteed
/// finite for extreme inputs; callers drop non-finite values.
#[must_use]
pub fn annualize_daily(rate: f64) -> f64 {
    (1.0 + rate / PERIODS_PER_YEAR).powi(365) - 1.0
}
