//! Energy Costs and Cache Profiles.
//!
//! This module holds the fixed per-event energy costs and the cache hit
//! profiles that weight SRAM against DRAM accesses. A profile is not a cache
//! simulation: it is a fixed probability that any given read is served from
//! SRAM, and every read is charged the probability-weighted blend of the two
//! access costs.

use crate::common::{EnergyError, Result};
use serde::Serialize;

/// Default DRAM access energy in picojoules.
pub const DEFAULT_DRAM_ACCESS_PJ: f64 = 100.0;

/// Default SRAM access energy in picojoules.
pub const DEFAULT_SRAM_ACCESS_PJ: f64 = 10.0;

/// Default multiply-accumulate energy in picojoules.
pub const DEFAULT_MAC_PJ: f64 = 5.0;

/// Per-event energy costs, in picojoules.
///
/// Invariants: all three costs are finite and positive, and an SRAM access
/// never costs more than a DRAM access.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnergyCosts {
    dram_access_energy: f64,
    sram_access_energy: f64,
    mac_energy: f64,
}

impl EnergyCosts {
    /// Creates a validated set of energy costs.
    ///
    /// # Arguments
    ///
    /// * `dram_access_energy` - Energy per DRAM access.
    /// * `sram_access_energy` - Energy per SRAM access, at most `dram_access_energy`.
    /// * `mac_energy` - Energy per multiply-accumulate.
    pub fn new(dram_access_energy: f64, sram_access_energy: f64, mac_energy: f64) -> Result<Self> {
        for (name, value) in [
            ("dram_access_energy", dram_access_energy),
            ("sram_access_energy", sram_access_energy),
            ("mac_energy", mac_energy),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EnergyError::InvalidCosts(format!(
                    "{} must be a positive finite value, got {}",
                    name, value
                )));
            }
        }

        if sram_access_energy > dram_access_energy {
            return Err(EnergyError::InvalidCosts(format!(
                "sram_access_energy ({}) exceeds dram_access_energy ({})",
                sram_access_energy, dram_access_energy
            )));
        }

        Ok(Self {
            dram_access_energy,
            sram_access_energy,
            mac_energy,
        })
    }

    /// Builds costs from values already known to satisfy the invariants.
    pub(crate) const fn from_parts(
        dram_access_energy: f64,
        sram_access_energy: f64,
        mac_energy: f64,
    ) -> Self {
        Self {
            dram_access_energy,
            sram_access_energy,
            mac_energy,
        }
    }

    pub fn dram_access_energy(&self) -> f64 {
        self.dram_access_energy
    }

    pub fn sram_access_energy(&self) -> f64 {
        self.sram_access_energy
    }

    pub fn mac_energy(&self) -> f64 {
        self.mac_energy
    }
}

impl Default for EnergyCosts {
    /// 100 pJ per DRAM access, 10 pJ per SRAM access, 5 pJ per MAC.
    fn default() -> Self {
        Self::from_parts(DEFAULT_DRAM_ACCESS_PJ, DEFAULT_SRAM_ACCESS_PJ, DEFAULT_MAC_PJ)
    }
}

/// Fixed SRAM/DRAM hit weighting for memory reads.
///
/// Only the SRAM fraction is stored; the DRAM fraction is always derived as
/// its complement so the two sum to one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CacheProfile {
    name: &'static str,
    sram_hit_fraction: f64,
}

impl CacheProfile {
    /// Most reads hit SRAM.
    pub const WITH_REUSE: CacheProfile = CacheProfile::from_parts("with-reuse", 0.9);

    /// Every read goes to DRAM.
    pub const NO_REUSE: CacheProfile = CacheProfile::from_parts("no-reuse", 0.0);

    /// Creates a validated profile.
    ///
    /// # Arguments
    ///
    /// * `name` - Label used in reports.
    /// * `sram_hit_fraction` - Fraction of reads served from SRAM, in `[0, 1]`.
    pub fn new(name: &'static str, sram_hit_fraction: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&sram_hit_fraction) {
            return Err(EnergyError::InvalidProfile(format!(
                "{}: sram_hit_fraction must lie in [0, 1], got {}",
                name, sram_hit_fraction
            )));
        }
        Ok(Self {
            name,
            sram_hit_fraction,
        })
    }

    pub(crate) const fn from_parts(name: &'static str, sram_hit_fraction: f64) -> Self {
        Self {
            name,
            sram_hit_fraction,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn sram_hit_fraction(&self) -> f64 {
        self.sram_hit_fraction
    }

    pub fn dram_hit_fraction(&self) -> f64 {
        1.0 - self.sram_hit_fraction
    }

    /// Probability-weighted cost of a single read under this profile.
    pub fn average_access_energy(&self, costs: &EnergyCosts) -> f64 {
        self.sram_hit_fraction * costs.sram_access_energy
            + self.dram_hit_fraction() * costs.dram_access_energy
    }
}

/// Read-only energy configuration: per-event costs plus both cache regimes.
///
/// Constructed once and passed by value into the calculator; nothing in the
/// model mutates it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnergyModel {
    pub costs: EnergyCosts,
    pub with_reuse: CacheProfile,
    pub no_reuse: CacheProfile,
}

impl EnergyModel {
    pub fn new(costs: EnergyCosts, with_reuse: CacheProfile, no_reuse: CacheProfile) -> Self {
        Self {
            costs,
            with_reuse,
            no_reuse,
        }
    }

    /// Energy spent on `mac_count` multiply-accumulates.
    ///
    /// Counts are taken as `f64` so that any dimension representable as an
    /// `i64` prices to a finite energy; integer counts below 2^53 are exact.
    pub fn compute_energy(&self, mac_count: f64) -> f64 {
        mac_count * self.costs.mac_energy
    }

    /// Energy spent on `read_count` memory reads under `profile`.
    pub fn memory_energy(&self, read_count: f64, profile: &CacheProfile) -> f64 {
        read_count * profile.average_access_energy(&self.costs)
    }
}

impl Default for EnergyModel {
    fn default() -> Self {
        Self::new(
            EnergyCosts::default(),
            CacheProfile::WITH_REUSE,
            CacheProfile::NO_REUSE,
        )
    }
}
