//! Mutable simulation input with selection coherence rules
//!
//! The input keeps plan and capital consistent with the chosen space:
//! picking a space resets the plan to that space's recommendation, and the
//! capital never sits below the selected plan's minimum investment.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assumptions::{Assumptions, PlanKey, ScenarioKey, SpaceKey};
use crate::error::SimulatorError;

/// The user-adjustable inputs for one simulation pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationInput {
    pub scenario: ScenarioKey,
    pub space: SpaceKey,
    pub plan: PlanKey,
    /// Invariant: >= the selected plan's minimum investment
    pub capital_invested: f64,
}

impl SimulationInput {
    /// Starting state: base scenario, small venue, its recommended plan,
    /// capital at the plan floor.
    pub fn new(assumptions: &Assumptions) -> Result<Self, SimulatorError> {
        let space = SpaceKey::Pequeno;
        let plan_key = assumptions.space(space)?.recommended_plan;
        let floor = assumptions.plan(plan_key)?.min_investment;
        Ok(Self {
            scenario: ScenarioKey::Base,
            space,
            plan: plan_key,
            capital_invested: floor,
        })
    }

    pub fn select_scenario(&mut self, key: ScenarioKey) {
        self.scenario = key;
    }

    /// Select a venue size. Resets the plan to the space's recommendation,
    /// which may raise (never lower) the capital.
    pub fn select_space(
        &mut self,
        assumptions: &Assumptions,
        key: SpaceKey,
    ) -> Result<(), SimulatorError> {
        let recommended = assumptions.space(key)?.recommended_plan;
        self.space = key;
        self.select_plan(assumptions, recommended)
    }

    /// Select a plan, raising the capital to its floor when below it.
    pub fn select_plan(
        &mut self,
        assumptions: &Assumptions,
        key: PlanKey,
    ) -> Result<(), SimulatorError> {
        let floor = assumptions.plan(key)?.min_investment;
        self.plan = key;
        if self.capital_invested < floor {
            debug!(
                "plan {} raises capital {} -> floor {}",
                key, self.capital_invested, floor
            );
            self.capital_invested = floor;
        }
        Ok(())
    }

    /// Set the capital. Negative or non-finite values clamp to the plan
    /// floor, as does anything below it.
    pub fn set_capital(
        &mut self,
        assumptions: &Assumptions,
        value: f64,
    ) -> Result<(), SimulatorError> {
        let floor = assumptions.plan(self.plan)?.min_investment;
        self.capital_invested = if value.is_finite() { value.max(floor) } else { floor };
        Ok(())
    }
}
