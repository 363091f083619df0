use crate::common::{EnergyError, EnergyUnit, Result};
use crate::model::costs::{
    CacheProfile, EnergyCosts, EnergyModel, DEFAULT_DRAM_ACCESS_PJ, DEFAULT_MAC_PJ,
    DEFAULT_SRAM_ACCESS_PJ,
};
use crate::model::ArchitectureProfile;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_SIZE: i64 = 256;
const DEFAULT_SWEEP: [i64; 5] = [64, 128, 256, 512, 1024];
const DEFAULT_OUTPUT_DIR: &str = "results";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub energy: EnergyConfig,
    #[serde(default)]
    pub profiles: ProfileConfig,
    #[serde(default)]
    pub workload: WorkloadConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default = "default_architectures")]
    pub architectures: Vec<ArchitectureConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            energy: EnergyConfig::default(),
            profiles: ProfileConfig::default(),
            workload: WorkloadConfig::default(),
            report: ReportConfig::default(),
            architectures: default_architectures(),
        }
    }
}

impl Config {
    /// Reads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| EnergyError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the validated energy model described by `[energy]` and `[profiles]`.
    pub fn energy_model(&self) -> Result<EnergyModel> {
        let costs = EnergyCosts::new(
            self.energy.dram_access_pj,
            self.energy.sram_access_pj,
            self.energy.mac_pj,
        )?;
        let with_reuse = CacheProfile::new("with-reuse", self.profiles.with_reuse_sram_fraction)?;
        let no_reuse = CacheProfile::new("no-reuse", self.profiles.no_reuse_sram_fraction)?;
        if no_reuse.sram_hit_fraction() > with_reuse.sram_hit_fraction() {
            return Err(EnergyError::InvalidProfile(format!(
                "no-reuse SRAM fraction {} exceeds with-reuse SRAM fraction {}",
                no_reuse.sram_hit_fraction(),
                with_reuse.sram_hit_fraction()
            )));
        }
        Ok(EnergyModel::new(costs, with_reuse, no_reuse))
    }

    pub fn architecture_profiles(&self) -> Result<Vec<ArchitectureProfile>> {
        self.architectures
            .iter()
            .map(|a| {
                let costs = EnergyCosts::new(a.dram_access_pj, a.sram_access_pj, a.mac_pj)
                    .map_err(|e| EnergyError::InvalidCosts(format!("{}: {}", a.name, e)))?;
                ArchitectureProfile::new(a.name.clone(), costs, a.sram_fraction)
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct EnergyConfig {
    #[serde(default = "default_dram")]
    pub dram_access_pj: f64,

    #[serde(default = "default_sram")]
    pub sram_access_pj: f64,

    #[serde(default = "default_mac")]
    pub mac_pj: f64,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            dram_access_pj: default_dram(),
            sram_access_pj: default_sram(),
            mac_pj: default_mac(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_reuse_fraction")]
    pub with_reuse_sram_fraction: f64,

    #[serde(default)]
    pub no_reuse_sram_fraction: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            with_reuse_sram_fraction: default_reuse_fraction(),
            no_reuse_sram_fraction: CacheProfile::NO_REUSE.sram_hit_fraction(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WorkloadConfig {
    #[serde(default = "default_size")]
    pub size: i64,

    #[serde(default = "default_sweep")]
    pub sweep_sizes: Vec<i64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            sweep_sizes: default_sweep(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub unit: EnergyUnit,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_charts")]
    pub charts: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            unit: EnergyUnit::default(),
            output_dir: default_output_dir(),
            charts: default_charts(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArchitectureConfig {
    pub name: String,
    pub sram_fraction: f64,
    pub dram_access_pj: f64,
    pub sram_access_pj: f64,

    #[serde(default = "default_mac")]
    pub mac_pj: f64,
}

fn default_dram() -> f64 {
    DEFAULT_DRAM_ACCESS_PJ
}

fn default_sram() -> f64 {
    DEFAULT_SRAM_ACCESS_PJ
}

fn default_mac() -> f64 {
    DEFAULT_MAC_PJ
}

fn default_reuse_fraction() -> f64 {
    CacheProfile::WITH_REUSE.sram_hit_fraction()
}

fn default_size() -> i64 {
    DEFAULT_SIZE
}

fn default_sweep() -> Vec<i64> {
    DEFAULT_SWEEP.to_vec()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_charts() -> bool {
    true
}

fn default_architectures() -> Vec<ArchitectureConfig> {
    ArchitectureProfile::presets()
        .into_iter()
        .map(|p| ArchitectureConfig {
            name: p.name.clone(),
            sram_fraction: p.sram_hit_fraction(),
            dram_access_pj: p.costs.dram_access_energy(),
            sram_access_pj: p.costs.sram_access_energy(),
            mac_pj: p.costs.mac_energy(),
        })
        .collect()
}
