//! Console Report Formatting.
//!
//! Renders computed evaluations as fixed-width text blocks. Functions return
//! `String`s so callers decide where the text goes.

use crate::common::EnergyUnit;
use crate::model::workload::{mac_count_f64, read_count_f64};
use crate::model::{ArchitectureComparison, Projection, ScalingRecord, WorkloadEvaluation};

const RULE: &str = "==========================================================";
const THIN_RULE: &str = "----------------------------------------------------------";

/// Formats a memory/compute ratio, printing `N/A` when it is undefined.
///
/// Ratios below one keep three decimals so small but non-zero values stay
/// distinguishable from zero.
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) if r >= 1.0 => format!("{:.1}x", r),
        Some(r) => format!("{:.3}x", r),
        None => "N/A".to_string(),
    }
}

/// Exact count when it fits, scientific notation otherwise.
fn format_count(exact: Option<u128>, approx: f64) -> String {
    match exact {
        Some(count) => count.to_string(),
        None => format!("{:.3e}", approx),
    }
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders the energy breakdown of a single matrix size.
pub fn render_evaluation(eval: &WorkloadEvaluation, unit: EnergyUnit) -> String {
    let e = |pj: f64| unit.from_picojoules(pj);

    join_lines(vec![
        RULE.to_string(),
        format!("MATRIX MULTIPLY ENERGY ({}x{})", eval.n, eval.n),
        RULE.to_string(),
        format!(
            "ops.mac                  {}",
            format_count(eval.mac_count, mac_count_f64(eval.n))
        ),
        format!(
            "ops.read                 {}",
            format_count(eval.read_count, read_count_f64(eval.n))
        ),
        THIN_RULE.to_string(),
        format!("energy.compute           {:.2} {}", e(eval.compute_energy), unit),
        format!(
            "energy.mem.reuse         {:.2} {} ({} compute)",
            e(eval.memory_energy_with_reuse),
            unit,
            format_ratio(eval.ratio_with_reuse())
        ),
        format!(
            "energy.mem.no_reuse      {:.2} {} ({} compute)",
            e(eval.memory_energy_no_reuse),
            unit,
            format_ratio(eval.ratio_no_reuse())
        ),
        format!("cache.benefit            {}", format_ratio(eval.cache_benefit())),
        RULE.to_string(),
    ])
}

/// Renders a sweep as a table, with ideal-scaling projections when supplied.
pub fn render_scaling_table(
    records: &[ScalingRecord],
    projections: &[Projection],
    unit: EnergyUnit,
) -> String {
    let e = |pj: f64| unit.from_picojoules(pj);

    let mut lines = vec![
        format!(
            "{:>6} | {:>14} | {:>14} | {:>14} | {:>14} | {:>8} | {:>8}",
            "Size",
            format!("Compute ({})", unit),
            format!("Mem/R ({})", unit),
            format!("Mem/NR ({})", unit),
            format!("Total ({})", unit),
            "R/C",
            "NR/C"
        ),
        "-".repeat(100),
    ];

    lines.extend(records.iter().map(|r| {
        format!(
            "{:>6} | {:>14.2} | {:>14.2} | {:>14.2} | {:>14.2} | {:>8} | {:>8}",
            r.size,
            e(r.compute_energy),
            e(r.memory_energy_with_reuse),
            e(r.memory_energy_no_reuse),
            e(r.total_with_reuse()),
            format_ratio(r.ratio_with_reuse()),
            format_ratio(r.ratio_no_reuse())
        )
    }));

    if let Some(first) = projections.first() {
        lines.push(String::new());
        lines.push(format!("Ideal scaling from n = {}:", first.size));
        lines.extend(projections.iter().map(|p| {
            format!(
                "{:>6} | compute O(n^3) {:>14.2} | memory O(n^2) {:>14.2}",
                p.size,
                e(p.compute_energy),
                e(p.memory_energy_with_reuse)
            )
        }));
    }
    join_lines(lines)
}

/// Renders the architecture comparison table.
pub fn render_architectures(
    comparisons: &[ArchitectureComparison],
    n: u64,
    unit: EnergyUnit,
) -> String {
    let mut lines = vec![
        format!("Architecture comparison at {}x{}", n, n),
        format!(
            "{:<16} | {:>18} | {:>10}",
            "Architecture",
            format!("Memory ({})", unit),
            "Efficiency"
        ),
        "-".repeat(52),
    ];
    lines.extend(comparisons.iter().map(|c| {
        format!(
            "{:<16} | {:>18.2} | {:>9.1}x",
            c.name,
            unit.from_picojoules(c.memory_energy),
            c.efficiency
        )
    }));
    join_lines(lines)
}
