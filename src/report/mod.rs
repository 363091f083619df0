//! Result presentation.
//!
//! Everything here consumes already-computed records: console text, SVG
//! charts, and a serializable bundle for JSON output.

/// SVG chart rendering.
pub mod chart;

/// Console text formatting.
pub mod console;

use crate::common::{EnergyUnit, Result};
use crate::model::{ArchitectureComparison, Projection, ScalingRecord, WorkloadEvaluation};
use serde::Serialize;

/// Derived ratios for one evaluation; `None` serializes as `null`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RatioSummary {
    pub memory_to_compute_with_reuse: Option<f64>,
    pub memory_to_compute_no_reuse: Option<f64>,
    pub cache_benefit: Option<f64>,
}

impl From<&WorkloadEvaluation> for RatioSummary {
    fn from(eval: &WorkloadEvaluation) -> Self {
        Self {
            memory_to_compute_with_reuse: eval.ratio_with_reuse(),
            memory_to_compute_no_reuse: eval.ratio_no_reuse(),
            cache_benefit: eval.cache_benefit(),
        }
    }
}

/// Everything one run produced. Energies are in picojoules.
#[derive(Debug, Serialize)]
pub struct Report {
    pub unit: EnergyUnit,
    pub evaluation: WorkloadEvaluation,
    pub ratios: RatioSummary,
    pub scaling: Vec<ScalingRecord>,
    pub projections: Vec<Projection>,
    pub architectures: Vec<ArchitectureComparison>,
}

impl Report {
    pub fn new(
        unit: EnergyUnit,
        evaluation: WorkloadEvaluation,
        scaling: Vec<ScalingRecord>,
        projections: Vec<Projection>,
        architectures: Vec<ArchitectureComparison>,
    ) -> Self {
        Self {
            unit,
            ratios: RatioSummary::from(&evaluation),
            evaluation,
            scaling,
            projections,
            architectures,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Full console rendering: point evaluation, sweep table, architectures.
    pub fn render_text(&self) -> String {
        let mut out = console::render_evaluation(&self.evaluation, self.unit);
        if !self.scaling.is_empty() {
            out.push('\n');
            out.push_str(&console::render_scaling_table(
                &self.scaling,
                &self.projections,
                self.unit,
            ));
        }
        if !self.architectures.is_empty() {
            out.push('\n');
            out.push_str(&console::render_architectures(
                &self.architectures,
                self.evaluation.n,
                self.unit,
            ));
        }
        out
    }
}
