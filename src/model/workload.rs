//! Workload Energy Calculator.
//!
//! Translates a square matrix dimension into operation counts for a naive
//! N×N×N multiplication and prices those counts with an `EnergyModel`.
//!
//! The counts are an analytical approximation, not a trace:
//!
//! * **MACs:** `n³`, one multiply-accumulate per inner-loop iteration.
//! * **Reads:** `2·n²`, one read of each element of the two input matrices.

use crate::common::{EnergyError, Result};
use crate::model::costs::EnergyModel;
use serde::Serialize;
use tracing::debug;

/// Exact multiply-accumulate count for an `n`×`n` matrix product.
///
/// Returns `None` if the count does not fit in a `u128`.
pub fn mac_count(n: u64) -> Option<u128> {
    let n = n as u128;
    n.checked_mul(n)?.checked_mul(n)
}

/// Exact memory read count for an `n`×`n` matrix product.
///
/// Returns `None` if the count does not fit in a `u128`.
pub fn read_count(n: u64) -> Option<u128> {
    let n = n as u128;
    n.checked_mul(n)?.checked_mul(2)
}

/// Approximate MAC count, finite for every `u64` dimension.
pub(crate) fn mac_count_f64(n: u64) -> f64 {
    let n = n as f64;
    n * n * n
}

/// Approximate read count, finite for every `u64` dimension.
pub(crate) fn read_count_f64(n: u64) -> f64 {
    let n = n as f64;
    2.0 * n * n
}

/// Divides two energies, yielding `None` when the denominator is zero.
pub(crate) fn energy_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}

/// Energy breakdown of one matrix size under both cache regimes.
///
/// The exact counts are `None` once they no longer fit a `u128`; the
/// energies are always computed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WorkloadEvaluation {
    pub n: u64,
    pub mac_count: Option<u128>,
    pub read_count: Option<u128>,
    pub compute_energy: f64,
    pub memory_energy_with_reuse: f64,
    pub memory_energy_no_reuse: f64,
}

impl WorkloadEvaluation {
    /// Memory energy with reuse relative to compute energy.
    ///
    /// `None` when compute energy is zero (only at `n = 0`).
    pub fn ratio_with_reuse(&self) -> Option<f64> {
        energy_ratio(self.memory_energy_with_reuse, self.compute_energy)
    }

    /// Memory energy without reuse relative to compute energy.
    pub fn ratio_no_reuse(&self) -> Option<f64> {
        energy_ratio(self.memory_energy_no_reuse, self.compute_energy)
    }

    /// Factor by which reuse reduces memory energy.
    pub fn cache_benefit(&self) -> Option<f64> {
        energy_ratio(self.memory_energy_no_reuse, self.memory_energy_with_reuse)
    }

    pub fn total_energy_with_reuse(&self) -> f64 {
        self.compute_energy + self.memory_energy_with_reuse
    }

    pub fn total_energy_no_reuse(&self) -> f64 {
        self.compute_energy + self.memory_energy_no_reuse
    }
}

/// Prices matrix-multiplication workloads against a fixed energy model.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorkloadEnergyCalculator {
    model: EnergyModel,
}

impl WorkloadEnergyCalculator {
    pub fn new(model: EnergyModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &EnergyModel {
        &self.model
    }

    /// Evaluates an `n`×`n` matrix multiplication.
    ///
    /// `n = 0` is degenerate but valid: every count and energy is zero.
    ///
    /// # Errors
    ///
    /// * `InvalidSize` if `n` is negative.
    pub fn evaluate(&self, n: i64) -> Result<WorkloadEvaluation> {
        let dim = u64::try_from(n).map_err(|_| EnergyError::InvalidSize(n))?;
        let macs = mac_count_f64(dim);
        let reads = read_count_f64(dim);

        let evaluation = WorkloadEvaluation {
            n: dim,
            mac_count: mac_count(dim),
            read_count: read_count(dim),
            compute_energy: self.model.compute_energy(macs),
            memory_energy_with_reuse: self.model.memory_energy(reads, &self.model.with_reuse),
            memory_energy_no_reuse: self.model.memory_energy(reads, &self.model.no_reuse),
        };

        debug!(
            n,
            macs,
            reads,
            compute_pj = evaluation.compute_energy,
            "evaluated workload"
        );

        Ok(evaluation)
    }
}
