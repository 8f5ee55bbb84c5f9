//! Fixed pricing assumptions: scenarios, space profiles, and plans
//!
//! All tables are process-wide constants; rows never change at runtime.

mod plan;
mod scenario;
mod space;

pub use plan::{Plan, PlanKey, PlanTable, CAPITAL_SLIDER_MAX};
pub use scenario::{Scenario, ScenarioKey, ScenarioTable};
pub use space::{SpaceKey, SpaceProfile, SpaceTable};

use crate::error::SimulatorError;

/// Combined assumption set handed to the simulation engine
#[derive(Debug, Clone, Default)]
pub struct Assumptions {
    pub scenarios: ScenarioTable,
    pub spaces: SpaceTable,
    pub plans: PlanTable,
}

impl Assumptions {
    /// Create the standard pricing assumption set
    pub fn default_pricing() -> Self {
        Self::default()
    }

    pub fn scenario(&self, key: ScenarioKey) -> Result<&Scenario, SimulatorError> {
        self.scenarios.get(key)
    }

    pub fn space(&self, key: SpaceKey) -> Result<&SpaceProfile, SimulatorError> {
        self.spaces.get(key)
    }

    pub fn plan(&self, key: PlanKey) -> Result<&Plan, SimulatorError> {
        self.plans.get(key)
    }
}
