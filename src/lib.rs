//! Financial projection simulator for FastMarket autonomous retail venues
//!
//! Maps a small set of fixed pricing assumptions (scenario, space profile,
//! plan) plus one capital input into monthly KPIs, a 12-month ramp-up
//! projection, a cumulative cash-flow series, and a cross-segment payback
//! comparison. All computations are pure and synchronous; the presentation
//! layer re-invokes them on every input change.

pub mod assumptions;
pub mod projection;
pub mod simulation;

mod error;

pub use assumptions::{
    Assumptions, Plan, PlanKey, Scenario, ScenarioKey, SpaceKey, SpaceProfile,
};
pub use error::SimulatorError;
pub use projection::{
    CashflowPoint, ProjectionPoint, SegmentPayback, SimulationEngine, SimulationOutput,
    UnitEconomics, VenueMetrics,
};
pub use simulation::SimulationInput;
