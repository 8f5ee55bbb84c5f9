//! Sweep every scenario x space combination and write per-combination KPIs
//!
//! Each combination is funded at its space's recommended plan floor, so the
//! output matches the payback-per-segment view across all three scenarios.

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

use fastmarket_simulator::{
    Assumptions, ScenarioKey, SimulationEngine, SimulationInput, SpaceKey,
};

#[derive(Debug, Parser)]
#[command(name = "sweep_grid", about = "KPI sweep across all scenario/space combinations")]
struct Args {
    /// Output CSV path
    #[arg(long, default_value = "grid_projection_output.csv")]
    output: String,
}

/// One CSV row per scenario/space combination
#[derive(Debug, Serialize)]
struct GridRow {
    scenario: ScenarioKey,
    space: SpaceKey,
    plan: String,
    capital: f64,
    daily_sales: u32,
    monthly_revenue: f64,
    gross_profit: f64,
    monthly_opex: f64,
    net_profit: f64,
    payback_months: u32,
    cumulative_12m: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let engine = SimulationEngine::new(Assumptions::default_pricing());

    let combos: Vec<(ScenarioKey, SpaceKey)> = ScenarioKey::ALL
        .iter()
        .flat_map(|&scenario| SpaceKey::ALL.iter().map(move |&space| (scenario, space)))
        .collect();

    println!("Running {} combinations...", combos.len());

    let rows: Vec<GridRow> = combos
        .par_iter()
        .map(|&(scenario, space)| {
            let assumptions = engine.assumptions();
            let mut input = SimulationInput::new(assumptions)?;
            input.select_scenario(scenario);
            input.select_space(assumptions, space)?;

            let output = engine.run(&input)?;
            let plan = assumptions.plan(input.plan)?;
            Ok(GridRow {
                scenario,
                space,
                plan: plan.label.to_string(),
                capital: input.capital_invested,
                daily_sales: output.metrics.daily_sales,
                monthly_revenue: output.metrics.monthly_revenue,
                gross_profit: output.metrics.gross_profit,
                monthly_opex: output.metrics.monthly_opex,
                net_profit: output.metrics.net_profit,
                payback_months: output.metrics.payback_months,
                cumulative_12m: output.cashflow.last().map(|c| c.cumulative).unwrap_or(0.0),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output);

    println!("\nGrid Summary:");
    for row in &rows {
        println!(
            "  {:<10} {:<8} plan={:<8} net/mo={:>9.0} payback={:>2}mo cash@12m={:>10.0}",
            row.scenario.to_string(),
            row.space.to_string(),
            row.plan,
            row.net_profit,
            row.payback_months,
            row.cumulative_12m
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
