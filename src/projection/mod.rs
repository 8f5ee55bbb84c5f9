//! Projection engine for venue financial simulations

mod cashflows;
mod engine;

pub use cashflows::{
    compute_cashflow, project_twelve_months, unit_economics_breakdown, CashflowPoint,
    ProjectionPoint, SegmentPayback, SimulationOutput, UnitEconomics, VenueMetrics,
};
pub use engine::{compute_base_metrics, SimulationEngine};

// ============================================================================
// Policy Constants
// ============================================================================
// Fixed modeling policy shared by every operation:
// - Revenue months are a flat 30 days
// - Payment fees and shrink are a combined flat fraction of revenue
// - Gross margin and displayed payback are clamped to fixed bands

/// Days of trading per month
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Combined payment-fee and shrink rate, as a fraction of monthly revenue (3.9%)
pub const FEES_AND_SHRINK_RATE: f64 = 0.039;

/// Lower bound on the effective gross margin fraction
pub const MIN_GROSS_MARGIN: f64 = 0.25;

/// Upper bound on the effective gross margin fraction
pub const MAX_GROSS_MARGIN: f64 = 0.55;

/// Shortest payback the UI ever reports, in months
pub const MIN_PAYBACK_MONTHS: u32 = 6;

/// Longest payback the UI ever reports, in months. Non-recovering venues
/// (zero net profit) also report this value; the raw figure stays +inf.
pub const MAX_PAYBACK_MONTHS: u32 = 24;

/// Demand maturation ramp applied to months 1..=12: sales start below the
/// steady state, build up, then plateau slightly above it.
pub const RAMP_FACTORS: [f64; 12] = [
    0.65, 0.72, 0.80, 0.88, 0.95, 1.00, 1.02, 1.03, 1.04, 1.05, 1.05, 1.05,
];
