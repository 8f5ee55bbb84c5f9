//! Demand scenario assumptions
//!
//! Scenarios apply multiplicative adjustments to a space profile's baseline
//! sales, margin, and operating expense assumptions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulatorError;

/// Identifier for one of the three fixed demand scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKey {
    /// Cautious assumptions
    Seguro,
    /// Most common outcome
    Base,
    /// Venue responding above expectations
    Acelerado,
}

impl ScenarioKey {
    pub const ALL: [ScenarioKey; 3] = [ScenarioKey::Seguro, ScenarioKey::Base, ScenarioKey::Acelerado];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKey::Seguro => "seguro",
            ScenarioKey::Base => "base",
            ScenarioKey::Acelerado => "acelerado",
        }
    }
}

impl fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioKey {
    type Err = SimulatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seguro" => Ok(ScenarioKey::Seguro),
            "base" => Ok(ScenarioKey::Base),
            "acelerado" => Ok(ScenarioKey::Acelerado),
            other => Err(SimulatorError::UnknownScenario(other.to_string())),
        }
    }
}

/// A named adjustment profile applied on top of a space profile's baseline
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub key: ScenarioKey,
    pub label: &'static str,
    pub subtitle: &'static str,
    /// Multiplier on baseline daily sales count
    pub sales_multiplier: f64,
    /// Signed offset on baseline gross margin fraction
    pub margin_delta: f64,
    /// Multiplier on baseline monthly operating expense
    pub opex_multiplier: f64,
}

/// The three fixed demand scenarios
#[derive(Debug, Clone)]
pub struct ScenarioTable {
    rows: Vec<Scenario>,
}

impl Default for ScenarioTable {
    fn default() -> Self {
        Self {
            rows: vec![
                Scenario {
                    key: ScenarioKey::Seguro,
                    label: "Seguro",
                    subtitle: "Mais cauteloso",
                    sales_multiplier: 0.92,
                    margin_delta: -0.01,
                    opex_multiplier: 1.0,
                },
                Scenario {
                    key: ScenarioKey::Base,
                    label: "Base",
                    subtitle: "O mais comum",
                    sales_multiplier: 1.0,
                    margin_delta: 0.0,
                    opex_multiplier: 1.0,
                },
                Scenario {
                    key: ScenarioKey::Acelerado,
                    label: "Acelerado",
                    subtitle: "Quando o ponto responde muito bem",
                    sales_multiplier: 1.05,
                    margin_delta: 0.01,
                    opex_multiplier: 1.05,
                },
            ],
        }
    }
}

impl ScenarioTable {
    /// Look up a scenario row by key
    pub fn get(&self, key: ScenarioKey) -> Result<&Scenario, SimulatorError> {
        self.rows
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| SimulatorError::UnknownScenario(key.to_string()))
    }

    pub fn rows(&self) -> &[Scenario] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_three_scenarios() {
        let table = ScenarioTable::default();
        assert_eq!(table.rows().len(), 3);

        let base = table.get(ScenarioKey::Base).unwrap();
        assert_eq!(base.sales_multiplier, 1.0);
        assert_eq!(base.margin_delta, 0.0);
        assert_eq!(base.opex_multiplier, 1.0);

        let acelerado = table.get(ScenarioKey::Acelerado).unwrap();
        assert_eq!(acelerado.sales_multiplier, 1.05);
        assert_eq!(acelerado.margin_delta, 0.01);
    }

    #[test]
    fn test_multipliers_positive() {
        let table = ScenarioTable::default();
        for row in table.rows() {
            assert!(row.sales_multiplier > 0.0);
            assert!(row.opex_multiplier > 0.0);
            assert!(row.margin_delta.abs() < 0.05);
        }
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("seguro".parse::<ScenarioKey>().unwrap(), ScenarioKey::Seguro);
        assert_eq!("acelerado".parse::<ScenarioKey>().unwrap(), ScenarioKey::Acelerado);
        assert!(matches!(
            "turbo".parse::<ScenarioKey>(),
            Err(SimulatorError::UnknownScenario(_))
        ));
    }
}
