//! Architecture Comparison.
//!
//! Prices the memory traffic of one workload under several hardware
//! assumptions (CPU-like, GPU-like, dedicated accelerator), each with its own
//! access costs and SRAM hit fraction.

use crate::common::{EnergyError, Result};
use crate::model::costs::{CacheProfile, EnergyCosts, EnergyModel, DEFAULT_MAC_PJ};
use crate::model::workload::read_count_f64;
use serde::Serialize;

/// A named hardware assumption.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArchitectureProfile {
    pub name: String,
    pub costs: EnergyCosts,
    sram_hit_fraction: f64,
}

impl ArchitectureProfile {
    /// Creates a profile, validating the SRAM hit fraction.
    pub fn new(
        name: impl Into<String>,
        costs: EnergyCosts,
        sram_hit_fraction: f64,
    ) -> Result<Self> {
        let name = name.into();
        if !(0.0..=1.0).contains(&sram_hit_fraction) {
            return Err(EnergyError::InvalidProfile(format!(
                "{}: SRAM hit fraction {} is outside [0, 1]",
                name, sram_hit_fraction
            )));
        }
        Ok(Self {
            name,
            costs,
            sram_hit_fraction,
        })
    }

    pub fn sram_hit_fraction(&self) -> f64 {
        self.sram_hit_fraction
    }

    /// Hit weighting used to price this architecture's reads.
    pub(crate) fn cache_profile(&self) -> CacheProfile {
        CacheProfile::from_parts("architecture", self.sram_hit_fraction)
    }

    /// CPU-like, GPU-like and AI-accelerator presets, baseline first.
    pub fn presets() -> Vec<ArchitectureProfile> {
        vec![
            preset("CPU-like", 0.5, 100.0, 10.0),
            preset("GPU-like", 0.8, 80.0, 8.0),
            preset("AI Accelerator", 0.95, 60.0, 5.0),
        ]
    }
}

fn preset(name: &str, sram_hit_fraction: f64, dram_pj: f64, sram_pj: f64) -> ArchitectureProfile {
    ArchitectureProfile {
        name: name.to_string(),
        costs: EnergyCosts::from_parts(dram_pj, sram_pj, DEFAULT_MAC_PJ),
        sram_hit_fraction,
    }
}

/// Memory energy of one architecture for a given workload size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArchitectureComparison {
    pub name: String,
    pub memory_energy: f64,
    /// Baseline DRAM access cost divided by this architecture's.
    pub efficiency: f64,
}

/// Compares memory energy of an `n`×`n` multiplication across architectures.
///
/// The first profile is the efficiency baseline. An empty profile list
/// yields an empty result.
pub fn compare_architectures(
    profiles: &[ArchitectureProfile],
    n: i64,
) -> Result<Vec<ArchitectureComparison>> {
    let dim = u64::try_from(n).map_err(|_| EnergyError::InvalidSize(n))?;
    let reads = read_count_f64(dim);

    let Some(baseline) = profiles.first() else {
        return Ok(Vec::new());
    };
    let baseline_dram = baseline.costs.dram_access_energy();

    Ok(profiles
        .iter()
        .map(|arch| {
            let cache = arch.cache_profile();
            let model = EnergyModel::new(arch.costs, cache, CacheProfile::NO_REUSE);
            ArchitectureComparison {
                name: arch.name.clone(),
                memory_energy: model.memory_energy(reads, &cache),
                efficiency: baseline_dram / arch.costs.dram_access_energy(),
            }
        })
        .collect())
}
