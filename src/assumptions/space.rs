//! Venue space profiles
//!
//! Baseline economics per venue size: daily sales count, average ticket,
//! gross margin, monthly operating expense, and the recommended plan.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::plan::PlanKey;
use crate::error::SimulatorError;

/// Identifier for one of the three fixed venue size profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceKey {
    Pequeno,
    Medio,
    Grande,
}

impl SpaceKey {
    pub const ALL: [SpaceKey; 3] = [SpaceKey::Pequeno, SpaceKey::Medio, SpaceKey::Grande];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceKey::Pequeno => "pequeno",
            SpaceKey::Medio => "medio",
            SpaceKey::Grande => "grande",
        }
    }
}

impl fmt::Display for SpaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceKey {
    type Err = SimulatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pequeno" => Ok(SpaceKey::Pequeno),
            "medio" => Ok(SpaceKey::Medio),
            "grande" => Ok(SpaceKey::Grande),
            other => Err(SimulatorError::UnknownSpace(other.to_string())),
        }
    }
}

/// Baseline economics for one venue size
#[derive(Debug, Clone, Serialize)]
pub struct SpaceProfile {
    pub key: SpaceKey,
    pub label: &'static str,
    pub subtitle: &'static str,
    /// Baseline sales count per day, before scenario adjustment
    pub daily_sales: u32,
    /// Average ticket value, unchanged by scenario
    pub avg_ticket: f64,
    /// Baseline gross margin fraction (0..1)
    pub gross_margin: f64,
    /// Baseline fixed operating expense per month
    pub monthly_opex: f64,
    /// Plan suggested when this profile is selected
    pub recommended_plan: PlanKey,
}

/// The three fixed venue size profiles
#[derive(Debug, Clone)]
pub struct SpaceTable {
    rows: Vec<SpaceProfile>,
}

impl Default for SpaceTable {
    fn default() -> Self {
        Self {
            rows: vec![
                SpaceProfile {
                    key: SpaceKey::Pequeno,
                    label: "Pequeno",
                    subtitle: "Condomínio / escritório / recepção",
                    daily_sales: 70,
                    avg_ticket: 16.0,
                    gross_margin: 0.35,
                    monthly_opex: 7_000.0,
                    recommended_plan: PlanKey::Mini,
                },
                SpaceProfile {
                    key: SpaceKey::Medio,
                    label: "Médio",
                    subtitle: "Hospital / indústria / educacional",
                    daily_sales: 130,
                    avg_ticket: 18.0,
                    gross_margin: 0.36,
                    monthly_opex: 12_000.0,
                    recommended_plan: PlanKey::Standard,
                },
                SpaceProfile {
                    key: SpaceKey::Grande,
                    label: "Grande",
                    subtitle: "Alta circulação / operação maior",
                    daily_sales: 220,
                    avg_ticket: 20.0,
                    gross_margin: 0.37,
                    monthly_opex: 25_000.0,
                    recommended_plan: PlanKey::Pro,
                },
            ],
        }
    }
}

impl SpaceTable {
    /// Look up a space profile row by key
    pub fn get(&self, key: SpaceKey) -> Result<&SpaceProfile, SimulatorError> {
        self.rows
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| SimulatorError::UnknownSpace(key.to_string()))
    }

    pub fn rows(&self) -> &[SpaceProfile] {
        &self.rows
    }
}
