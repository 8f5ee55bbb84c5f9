//! Service plan tiers and investment floors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulatorError;

/// Upper bound suggested for the capital input by the consuming surface.
/// The lower bound is always the selected plan's minimum investment.
pub const CAPITAL_SLIDER_MAX: f64 = 350_000.0;

/// Identifier for one of the three fixed service plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKey {
    Mini,
    Standard,
    Pro,
}

impl PlanKey {
    pub const ALL: [PlanKey; 3] = [PlanKey::Mini, PlanKey::Standard, PlanKey::Pro];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKey::Mini => "mini",
            PlanKey::Standard => "standard",
            PlanKey::Pro => "pro",
        }
    }
}

impl fmt::Display for PlanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanKey {
    type Err = SimulatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mini" => Ok(PlanKey::Mini),
            "standard" => Ok(PlanKey::Standard),
            "pro" => Ok(PlanKey::Pro),
            other => Err(SimulatorError::UnknownPlan(other.to_string())),
        }
    }
}

/// A service tier with its minimum investment floor and feature lists
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub key: PlanKey,
    pub label: &'static str,
    /// Capital floor enforced whenever this plan is selected
    pub min_investment: f64,
    pub ideal_for: &'static str,
    pub includes: &'static [&'static str],
    pub add_ons: &'static [&'static str],
}

/// The three fixed service plans
#[derive(Debug, Clone)]
pub struct PlanTable {
    rows: Vec<Plan>,
}

impl Default for PlanTable {
    fn default() -> Self {
        Self {
            rows: vec![
                Plan {
                    key: PlanKey::Mini,
                    label: "Mini",
                    min_investment: 25_000.0,
                    ideal_for: "Espaço pequeno / começo rápido",
                    includes: &[
                        "Loja 24/7",
                        "Pagamentos (PIX/cartão)",
                        "Dashboard básico",
                        "Suporte e manutenção",
                    ],
                    add_ons: &["Mídia/Totem", "Integração ERP", "Relatórios avançados"],
                },
                Plan {
                    key: PlanKey::Standard,
                    label: "Standard",
                    min_investment: 80_000.0,
                    ideal_for: "Espaço médio / volume recorrente",
                    includes: &[
                        "Tudo do Mini",
                        "Gestão de estoque mais completa",
                        "Rotina de reposição",
                        "Relatórios e alertas",
                    ],
                    add_ons: &["Módulo de promoções", "Módulo de fidelidade", "Mídia/Totem"],
                },
                Plan {
                    key: PlanKey::Pro,
                    label: "Pro",
                    min_investment: 150_000.0,
                    ideal_for: "Espaço grande / escala",
                    includes: &[
                        "Tudo do Standard",
                        "Dashboards avançados",
                        "Rotas/operacional",
                        "Integrações e automações",
                    ],
                    add_ons: &["Múltiplas unidades", "BI personalizado", "Integrações sob medida"],
                },
            ],
        }
    }
}

impl PlanTable {
    /// Look up a plan row by key
    pub fn get(&self, key: PlanKey) -> Result<&Plan, SimulatorError> {
        self.rows
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| SimulatorError::UnknownPlan(key.to_string()))
    }

    pub fn rows(&self) -> &[Plan] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_investment_floors() {
        let table = PlanTable::default();

        assert_eq!(table.get(PlanKey::Mini).unwrap().min_investment, 25_000.0);
        assert_eq!(table.get(PlanKey::Standard).unwrap().min_investment, 80_000.0);
        assert_eq!(table.get(PlanKey::Pro).unwrap().min_investment, 150_000.0);
    }

    #[test]
    fn test_floors_ascending() {
        let table = PlanTable::default();
        let floors: Vec<f64> = table.rows().iter().map(|p| p.min_investment).collect();
        assert!(floors.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_feature_lists_non_empty() {
        let table = PlanTable::default();
        for plan in table.rows() {
            assert!(!plan.includes.is_empty());
            assert!(!plan.add_ons.is_empty());
        }
    }
}
