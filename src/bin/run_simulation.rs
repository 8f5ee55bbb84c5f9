//! Run one venue simulation and print the projection report
//!
//! Mirrors what the simulator page shows: KPIs, the 12-month ramp,
//! cumulative cash, payback per venue size, and the revenue breakdown.
//! Currency and percentages render pt-BR style, whole units only.

use anyhow::Result;
use clap::Parser;

use fastmarket_simulator::{
    Assumptions, PlanKey, ScenarioKey, SimulationEngine, SimulationInput, SpaceKey,
};

#[derive(Debug, Parser)]
#[command(name = "run_simulation", about = "FastMarket venue financial projection")]
struct Args {
    /// Demand scenario: seguro, base, or acelerado
    #[arg(long, default_value = "base")]
    scenario: ScenarioKey,

    /// Venue size: pequeno, medio, or grande
    #[arg(long, default_value = "pequeno")]
    space: SpaceKey,

    /// Plan override: mini, standard, or pro (defaults to the space's recommendation)
    #[arg(long)]
    plan: Option<PlanKey>,

    /// Capital invested (raised to the plan's minimum when below it)
    #[arg(long)]
    capital: Option<f64>,

    /// Emit the raw output as JSON instead of the report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let assumptions = Assumptions::default_pricing();
    let mut input = SimulationInput::new(&assumptions)?;
    input.select_scenario(args.scenario);
    input.select_space(&assumptions, args.space)?;
    if let Some(plan) = args.plan {
        input.select_plan(&assumptions, plan)?;
    }
    if let Some(capital) = args.capital {
        input.set_capital(&assumptions, capital)?;
    }

    let engine = SimulationEngine::new(assumptions);
    let output = engine.run(&input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let scenario = engine.assumptions().scenario(input.scenario)?;
    let space = engine.assumptions().space(input.space)?;
    let plan = engine.assumptions().plan(input.plan)?;
    let metrics = &output.metrics;

    println!(
        "FastMarket — cenário {} ({}), espaço {} ({})",
        scenario.label, scenario.subtitle, space.label, space.subtitle
    );
    println!(
        "Plano {} (a partir de {}) — investimento: {}",
        plan.label,
        format_brl(plan.min_investment),
        format_brl(input.capital_invested)
    );

    println!("\nKPIs");
    println!("  {:<22} {}", "Receita/mês", format_brl(metrics.monthly_revenue));
    println!("  {:<22} {}", "Lucro líquido/mês", format_brl(metrics.net_profit));
    println!("  {:<22} {} meses", "Payback estimado", metrics.payback_months);
    println!("  {:<22} {}", "Margem bruta", format_pct(metrics.gross_margin));
    println!("  {:<22} {}", "Vendas/dia", metrics.daily_sales);
    println!("  {:<22} {}", "Ticket médio", format_brl(metrics.avg_ticket));
    println!("  {:<22} {}", "OPEX/mês", format_brl(metrics.monthly_opex));

    println!("\nEvolução (12 meses)");
    println!("  {:<5} {:<14} {:<16} {:<16}", "Mês", "Receita", "Lucro líquido", "Caixa acumulado");
    for (p, c) in output.projection.iter().zip(&output.cashflow) {
        println!(
            "  M{:<4} {:<14} {:<16} {:<16}",
            p.period,
            format_brl(p.revenue),
            format_brl(p.net_profit),
            format_brl(c.cumulative)
        );
    }

    println!("\nPayback por porte (cenário {})", scenario.label);
    for segment in &output.segment_comparison {
        println!("  {:<10} {} meses", segment.segment_label, segment.payback_months);
    }

    println!("\nDe onde vem o resultado");
    println!("  {:<14} {}", "CMV", format_brl(output.unit_economics.cmv));
    println!("  {:<14} {}", "OPEX", format_brl(output.unit_economics.opex));
    println!("  {:<14} {}", "Taxas/perdas", format_brl(output.unit_economics.fees_and_shrink));
    println!("  {:<14} {}", "Lucro", format_brl(output.unit_economics.net_profit));

    println!("\nPlano {} — {}", plan.label, plan.ideal_for);
    println!("  Inclui: {}", plan.includes.join(", "));
    println!("  Módulos adicionais: {}", plan.add_ons.join(", "));

    Ok(())
}

/// Whole-unit BRL, pt-BR grouping: 33600 -> "R$ 33.600"
fn format_brl(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-R$ {grouped}")
    } else {
        format!("R$ {grouped}")
    }
}

/// Whole-percent rendering of a fraction: 0.35 -> "35%"
fn format_pct(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl_grouping() {
        assert_eq!(format_brl(0.0), "R$ 0");
        assert_eq!(format_brl(16.0), "R$ 16");
        assert_eq!(format_brl(7_000.0), "R$ 7.000");
        assert_eq!(format_brl(33_600.0), "R$ 33.600");
        assert_eq!(format_brl(1_310.4), "R$ 1.310");
        assert_eq!(format_brl(350_000.0), "R$ 350.000");
        assert_eq!(format_brl(-25_000.0), "-R$ 25.000");
    }

    #[test]
    fn test_format_pct_whole_units() {
        assert_eq!(format_pct(0.35), "35%");
        assert_eq!(format_pct(0.039), "4%");
        assert_eq!(format_pct(0.0), "0%");
    }
}
