//! Scaling Analyzer.
//!
//! Repeats the workload calculation over an ordered list of matrix sizes so
//! the compute/memory energy split can be followed as the problem grows.
//! Sizes are evaluated independently: duplicates yield duplicate records and
//! the output order always matches the input order.

use crate::common::Result;
use crate::model::workload::{energy_ratio, WorkloadEnergyCalculator, WorkloadEvaluation};
use serde::Serialize;
use tracing::info;

/// One row of a scaling sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScalingRecord {
    pub size: u64,
    pub compute_energy: f64,
    pub memory_energy_with_reuse: f64,
    pub memory_energy_no_reuse: f64,
}

impl ScalingRecord {
    pub fn ratio_with_reuse(&self) -> Option<f64> {
        energy_ratio(self.memory_energy_with_reuse, self.compute_energy)
    }

    pub fn ratio_no_reuse(&self) -> Option<f64> {
        energy_ratio(self.memory_energy_no_reuse, self.compute_energy)
    }

    pub fn total_with_reuse(&self) -> f64 {
        self.compute_energy + self.memory_energy_with_reuse
    }
}

impl From<WorkloadEvaluation> for ScalingRecord {
    fn from(eval: WorkloadEvaluation) -> Self {
        Self {
            size: eval.n,
            compute_energy: eval.compute_energy,
            memory_energy_with_reuse: eval.memory_energy_with_reuse,
            memory_energy_no_reuse: eval.memory_energy_no_reuse,
        }
    }
}

/// Ideal-scaling reference point derived from the first record of a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Projection {
    pub size: u64,
    /// Compute energy extrapolated as `(n / n₀)³`.
    pub compute_energy: f64,
    /// With-reuse memory energy extrapolated as `(n / n₀)²`.
    pub memory_energy_with_reuse: f64,
}

/// Runs the workload calculator across many sizes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalingAnalyzer {
    calculator: WorkloadEnergyCalculator,
}

impl ScalingAnalyzer {
    pub fn new(calculator: WorkloadEnergyCalculator) -> Self {
        Self { calculator }
    }

    /// Evaluates every size in order.
    ///
    /// An empty slice yields an empty vector. The first invalid size aborts
    /// the sweep and no partial result is returned.
    pub fn sweep(&self, sizes: &[i64]) -> Result<Vec<ScalingRecord>> {
        let records = sizes
            .iter()
            .map(|&n| self.calculator.evaluate(n).map(ScalingRecord::from))
            .collect::<Result<Vec<_>>>()?;

        info!(points = records.len(), "scaling sweep complete");
        Ok(records)
    }

    /// Projects ideal O(n³) compute and O(n²) memory growth from the first record.
    ///
    /// Returns an empty vector when there are no records or the base size is zero.
    pub fn theoretical_projection(records: &[ScalingRecord]) -> Vec<Projection> {
        let Some(base) = records.first() else {
            return Vec::new();
        };
        if base.size == 0 {
            return Vec::new();
        }

        let n0 = base.size as f64;
        records
            .iter()
            .map(|r| {
                let scale = r.size as f64 / n0;
                Projection {
                    size: r.size,
                    compute_energy: base.compute_energy * scale.powi(3),
                    memory_energy_with_reuse: base.memory_energy_with_reuse * scale.powi(2),
                }
            })
            .collect()
    }
}
