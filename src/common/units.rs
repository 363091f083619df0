//! Energy Units.
//!
//! The model carries every energy figure as an `f64` number of picojoules.
//! `EnergyUnit` only matters at the presentation boundary, where figures are
//! scaled into whatever unit the report was configured with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display unit for energy figures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    #[serde(rename = "pJ")]
    Picojoule,
    #[serde(rename = "nJ")]
    Nanojoule,
    #[default]
    #[serde(rename = "uJ")]
    Microjoule,
    #[serde(rename = "mJ")]
    Millijoule,
    #[serde(rename = "J")]
    Joule,
}

impl EnergyUnit {
    /// Number of picojoules in one of this unit.
    pub fn picojoules_per_unit(self) -> f64 {
        match self {
            EnergyUnit::Picojoule => 1.0,
            EnergyUnit::Nanojoule => 1e3,
            EnergyUnit::Microjoule => 1e6,
            EnergyUnit::Millijoule => 1e9,
            EnergyUnit::Joule => 1e12,
        }
    }

    /// Converts a picojoule figure into this unit.
    pub fn from_picojoules(self, pj: f64) -> f64 {
        pj / self.picojoules_per_unit()
    }

    /// Printable unit symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Picojoule => "pJ",
            EnergyUnit::Nanojoule => "nJ",
            EnergyUnit::Microjoule => "µJ",
            EnergyUnit::Millijoule => "mJ",
            EnergyUnit::Joule => "J",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for EnergyUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pj" => Ok(EnergyUnit::Picojoule),
            "nj" => Ok(EnergyUnit::Nanojoule),
            "uj" | "µj" => Ok(EnergyUnit::Microjoule),
            "mj" => Ok(EnergyUnit::Millijoule),
            "j" => Ok(EnergyUnit::Joule),
            other => Err(format!("unknown energy unit '{}'", other)),
        }
    }
}
