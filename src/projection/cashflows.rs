//! Output rows and derived series
//!
//! The 12-month projection, cumulative cash flow, and unit-economics
//! breakdown are all re-derived from a [`VenueMetrics`] snapshot; none of
//! them carry hidden state between calls.

use serde::Serialize;

use super::{FEES_AND_SHRINK_RATE, RAMP_FACTORS};

/// Monthly KPIs for one scenario/space/capital combination
#[derive(Debug, Clone, Serialize)]
pub struct VenueMetrics {
    /// Scenario-adjusted sales count per day
    pub daily_sales: u32,
    pub avg_ticket: f64,
    /// Effective gross margin after scenario delta and policy clamp
    pub gross_margin: f64,
    /// Scenario-adjusted fixed expense per month, rounded to whole units
    pub monthly_opex: f64,
    pub monthly_revenue: f64,
    pub gross_profit: f64,
    pub fees_and_shrink: f64,
    /// Floored at zero; a venue reports breakeven, never a monthly loss
    pub net_profit: f64,
    /// capital / net_profit, +inf when net profit is zero
    pub payback_months_raw: f64,
    /// Raw payback rounded and clamped to the display band. Masks both very
    /// fast and non-recovering paybacks; consult `payback_months_raw` for
    /// the true figure.
    pub payback_months: u32,
}

/// One month of the ramp-up projection
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionPoint {
    /// Month index, 1..=12
    pub period: u32,
    pub revenue: f64,
    pub net_profit: f64,
}

/// Cumulative cash position at the end of one month
#[derive(Debug, Clone, Serialize)]
pub struct CashflowPoint {
    /// Month index, 1..=12
    pub period: u32,
    /// Starts at -capital + first month's net profit
    pub cumulative: f64,
}

/// Clamped payback for one venue size at its recommended plan's floor
#[derive(Debug, Clone, Serialize)]
pub struct SegmentPayback {
    pub segment_label: &'static str,
    pub payback_months: u32,
}

/// Where one month of revenue goes: goods, fixed costs, fees, residual.
///
/// The four components sum to monthly revenue only while the raw net profit
/// is non-negative. Once the residual is floored at zero the sum exceeds
/// revenue; the mismatch is left visible rather than reconciled into the
/// other components.
#[derive(Debug, Clone, Serialize)]
pub struct UnitEconomics {
    /// Cost of merchandise sold: revenue not retained as gross margin
    pub cmv: f64,
    pub opex: f64,
    pub fees_and_shrink: f64,
    pub net_profit: f64,
}

/// Everything one simulation pass produces
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutput {
    pub metrics: VenueMetrics,
    pub projection: Vec<ProjectionPoint>,
    pub cashflow: Vec<CashflowPoint>,
    pub segment_comparison: Vec<SegmentPayback>,
    pub unit_economics: UnitEconomics,
}

/// Apply the maturation ramp to the base month, re-deriving profit per month.
///
/// Always returns exactly 12 entries, in ramp order.
pub fn project_twelve_months(metrics: &VenueMetrics) -> Vec<ProjectionPoint> {
    RAMP_FACTORS
        .iter()
        .enumerate()
        .map(|(idx, factor)| {
            let revenue = metrics.monthly_revenue * factor;
            let gross_profit = revenue * metrics.gross_margin;
            let fees_and_shrink = revenue * FEES_AND_SHRINK_RATE;
            let net_profit = (gross_profit - metrics.monthly_opex - fees_and_shrink).max(0.0);
            ProjectionPoint {
                period: idx as u32 + 1,
                revenue,
                net_profit,
            }
        })
        .collect()
}

/// Running cash position: starts at -capital and adds each month's net profit.
///
/// Non-decreasing by construction, since monthly net profit is floored at
/// zero. The sign of the last entry tells whether the capital is recovered
/// within the 12-month horizon.
pub fn compute_cashflow(capital: f64, projection: &[ProjectionPoint]) -> Vec<CashflowPoint> {
    let mut cumulative = -capital;
    projection
        .iter()
        .map(|p| {
            cumulative += p.net_profit;
            CashflowPoint {
                period: p.period,
                cumulative,
            }
        })
        .collect()
}

/// Split one month of revenue into CMV, opex, fees/shrink, and net profit.
pub fn unit_economics_breakdown(metrics: &VenueMetrics) -> UnitEconomics {
    let cmv = metrics.monthly_revenue * (1.0 - metrics.gross_margin);
    let fees_and_shrink = metrics.monthly_revenue * FEES_AND_SHRINK_RATE;
    let net_profit =
        (metrics.monthly_revenue - cmv - metrics.monthly_opex - fees_and_shrink).max(0.0);
    UnitEconomics {
        cmv,
        opex: metrics.monthly_opex,
        fees_and_shrink,
        net_profit,
    }
}
