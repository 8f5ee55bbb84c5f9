//! Core KPI formulas and simulation orchestration

use log::debug;

use super::cashflows::{
    compute_cashflow, project_twelve_months, unit_economics_breakdown, SegmentPayback,
    SimulationOutput, VenueMetrics,
};
use super::{
    DAYS_PER_MONTH, FEES_AND_SHRINK_RATE, MAX_GROSS_MARGIN, MAX_PAYBACK_MONTHS, MIN_GROSS_MARGIN,
    MIN_PAYBACK_MONTHS,
};
use crate::assumptions::{Assumptions, Scenario, ScenarioKey, SpaceProfile};
use crate::error::SimulatorError;
use crate::simulation::SimulationInput;

/// Derive the base-month KPIs for one scenario/space/capital combination.
///
/// Negative capital is clamped to zero before use.
pub fn compute_base_metrics(scenario: &Scenario, space: &SpaceProfile, capital: f64) -> VenueMetrics {
    let capital = if capital.is_finite() { capital.max(0.0) } else { 0.0 };

    let daily_sales = (space.daily_sales as f64 * scenario.sales_multiplier).round() as u32;
    let gross_margin =
        (space.gross_margin + scenario.margin_delta).clamp(MIN_GROSS_MARGIN, MAX_GROSS_MARGIN);
    let monthly_opex = (space.monthly_opex * scenario.opex_multiplier).round();

    let monthly_revenue = daily_sales as f64 * space.avg_ticket * DAYS_PER_MONTH;
    let gross_profit = monthly_revenue * gross_margin;
    let fees_and_shrink = monthly_revenue * FEES_AND_SHRINK_RATE;
    let net_profit = (gross_profit - monthly_opex - fees_and_shrink).max(0.0);

    let payback_months_raw = if net_profit > 0.0 {
        capital / net_profit
    } else {
        f64::INFINITY
    };

    VenueMetrics {
        daily_sales,
        avg_ticket: space.avg_ticket,
        gross_margin,
        monthly_opex,
        monthly_revenue,
        gross_profit,
        fees_and_shrink,
        net_profit,
        payback_months_raw,
        payback_months: clamp_payback_display(payback_months_raw),
    }
}

/// Round the raw payback and clamp it to the reporting band. Non-recovering
/// venues (+inf raw) report the band maximum.
fn clamp_payback_display(raw: f64) -> u32 {
    if !raw.is_finite() {
        return MAX_PAYBACK_MONTHS;
    }
    raw.round()
        .clamp(MIN_PAYBACK_MONTHS as f64, MAX_PAYBACK_MONTHS as f64) as u32
}

/// Runs the full simulation for a given input against a fixed assumption set
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    assumptions: Assumptions,
}

impl SimulationEngine {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Compute every output for one input: base metrics, 12-month
    /// projection, cumulative cash flow, segment comparison, and the
    /// unit-economics breakdown.
    pub fn run(&self, input: &SimulationInput) -> Result<SimulationOutput, SimulatorError> {
        let scenario = self.assumptions.scenario(input.scenario)?;
        let space = self.assumptions.space(input.space)?;

        debug!(
            "run scenario={} space={} plan={} capital={}",
            input.scenario, input.space, input.plan, input.capital_invested
        );

        let metrics = compute_base_metrics(scenario, space, input.capital_invested);
        let projection = project_twelve_months(&metrics);
        let cashflow = compute_cashflow(input.capital_invested.max(0.0), &projection);
        let segment_comparison = self.segment_payback_comparison(input.scenario)?;
        let unit_economics = unit_economics_breakdown(&metrics);

        Ok(SimulationOutput {
            metrics,
            projection,
            cashflow,
            segment_comparison,
            unit_economics,
        })
    }

    /// Payback per venue size under one scenario, each funded at its
    /// recommended plan's minimum investment. Leaves the caller's current
    /// selection untouched.
    pub fn segment_payback_comparison(
        &self,
        scenario_key: ScenarioKey,
    ) -> Result<Vec<SegmentPayback>, SimulatorError> {
        let scenario = self.assumptions.scenario(scenario_key)?;

        self.assumptions
            .spaces
            .rows()
            .iter()
            .map(|space| {
                let plan = self.assumptions.plan(space.recommended_plan)?;
                let metrics = compute_base_metrics(scenario, space, plan.min_investment);
                Ok(SegmentPayback {
                    segment_label: space.label,
                    payback_months: metrics.payback_months,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{PlanKey, SpaceKey};
    use approx::assert_relative_eq;

    fn engine() -> SimulationEngine {
        SimulationEngine::new(Assumptions::default_pricing())
    }

    fn scenario(key: ScenarioKey) -> Scenario {
        engine().assumptions().scenario(key).unwrap().clone()
    }

    fn space(key: SpaceKey) -> SpaceProfile {
        engine().assumptions().space(key).unwrap().clone()
    }

    #[test]
    fn test_small_venue_base_scenario() {
        let metrics = compute_base_metrics(
            &scenario(ScenarioKey::Base),
            &space(SpaceKey::Pequeno),
            25_000.0,
        );

        assert_eq!(metrics.daily_sales, 70);
        assert_relative_eq!(metrics.monthly_revenue, 33_600.0);
        assert_relative_eq!(metrics.gross_profit, 11_760.0);
        assert_relative_eq!(metrics.fees_and_shrink, 1_310.4, epsilon = 1e-9);
        assert_relative_eq!(metrics.net_profit, 3_449.6, epsilon = 1e-9);
        assert_relative_eq!(metrics.payback_months_raw, 25_000.0 / 3_449.6, epsilon = 1e-9);
        // 7.247 months rounds to 7, inside the band
        assert_eq!(metrics.payback_months, 7);
    }

    #[test]
    fn test_small_venue_accelerated_scenario() {
        let metrics = compute_base_metrics(
            &scenario(ScenarioKey::Acelerado),
            &space(SpaceKey::Pequeno),
            25_000.0,
        );

        assert_eq!(metrics.daily_sales, 74); // round(70 * 1.05)
        assert_relative_eq!(metrics.gross_margin, 0.36, epsilon = 1e-9);
        assert_relative_eq!(metrics.monthly_opex, 7_350.0);
        assert_relative_eq!(metrics.monthly_revenue, 35_520.0);
        assert_relative_eq!(metrics.gross_profit, 12_787.2, epsilon = 1e-9);
        assert_relative_eq!(metrics.fees_and_shrink, 1_385.28, epsilon = 1e-9);
        assert_relative_eq!(metrics.net_profit, 4_051.92, epsilon = 1e-9);
    }

    #[test]
    fn test_revenue_identity_all_combinations() {
        let engine = engine();
        for scenario in engine.assumptions().scenarios.rows() {
            for space in engine.assumptions().spaces.rows() {
                let metrics = compute_base_metrics(scenario, space, 50_000.0);

                let expected_sales =
                    (space.daily_sales as f64 * scenario.sales_multiplier).round() as u32;
                assert_eq!(metrics.daily_sales, expected_sales);
                assert_relative_eq!(
                    metrics.monthly_revenue,
                    metrics.daily_sales as f64 * space.avg_ticket * 30.0
                );
                assert!(metrics.net_profit >= 0.0);
                assert!(metrics.gross_margin >= 0.25 && metrics.gross_margin <= 0.55);
                assert!(metrics.payback_months >= 6 && metrics.payback_months <= 24);
            }
        }
    }

    #[test]
    fn test_margin_clamped_for_adversarial_deltas() {
        let mut adversarial = scenario(ScenarioKey::Base);
        adversarial.margin_delta = 0.50;
        let metrics = compute_base_metrics(&adversarial, &space(SpaceKey::Pequeno), 25_000.0);
        assert_eq!(metrics.gross_margin, 0.55);

        adversarial.margin_delta = -0.50;
        let metrics = compute_base_metrics(&adversarial, &space(SpaceKey::Pequeno), 25_000.0);
        assert_eq!(metrics.gross_margin, 0.25);
    }

    #[test]
    fn test_non_recovering_venue_reports_band_maximum() {
        // Opex blown up far past gross profit: net profit floors at zero
        let mut adversarial = scenario(ScenarioKey::Base);
        adversarial.opex_multiplier = 10.0;
        let metrics = compute_base_metrics(&adversarial, &space(SpaceKey::Pequeno), 25_000.0);

        assert_eq!(metrics.net_profit, 0.0);
        assert!(metrics.payback_months_raw.is_infinite());
        assert_eq!(metrics.payback_months, 24);
    }

    #[test]
    fn test_fast_payback_clamps_to_band_minimum() {
        // Tiny capital against a healthy venue: raw payback under a month
        let metrics = compute_base_metrics(
            &scenario(ScenarioKey::Base),
            &space(SpaceKey::Grande),
            1_000.0,
        );
        assert!(metrics.payback_months_raw < 1.0);
        assert_eq!(metrics.payback_months, 6);
    }

    #[test]
    fn test_negative_capital_clamped() {
        let metrics = compute_base_metrics(
            &scenario(ScenarioKey::Base),
            &space(SpaceKey::Pequeno),
            -5_000.0,
        );
        assert_eq!(metrics.payback_months_raw, 0.0);
        assert_eq!(metrics.payback_months, 6);
    }

    #[test]
    fn test_run_produces_full_output() {
        let engine = engine();
        let mut input = SimulationInput::new(engine.assumptions()).unwrap();
        input.select_scenario(ScenarioKey::Acelerado);

        let output = engine.run(&input).unwrap();

        assert_eq!(output.projection.len(), 12);
        assert_eq!(output.cashflow.len(), 12);
        assert_eq!(output.segment_comparison.len(), 3);
        assert_relative_eq!(
            output.unit_economics.cmv
                + output.unit_economics.opex
                + output.unit_economics.fees_and_shrink
                + output.unit_economics.net_profit,
            output.metrics.monthly_revenue,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_segment_comparison_uses_recommended_plan_floors() {
        let engine = engine();
        let segments = engine
            .segment_payback_comparison(ScenarioKey::Base)
            .unwrap();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].segment_label, "Pequeno");

        // Small venue at the Mini floor: 25000 / 3449.6 rounds to 7
        assert_eq!(segments[0].payback_months, 7);

        for segment in &segments {
            assert!(segment.payback_months >= 6 && segment.payback_months <= 24);
        }

        // The comparison must not depend on any particular plan selection
        let plan_floor = engine.assumptions().plan(PlanKey::Mini).unwrap().min_investment;
        assert_eq!(plan_floor, 25_000.0);
    }
}
