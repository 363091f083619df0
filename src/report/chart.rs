//! Chart Rendering.
//!
//! Draws the single-size bar comparison and the multi-size scaling curves as
//! SVG files. The scaling chart uses log-log axes, so points with a zero size
//! or zero energy are left out of it.

use crate::common::{EnergyError, EnergyUnit, Result};
use crate::model::{ScalingRecord, WorkloadEvaluation};
use plotters::prelude::*;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name of the single-size bar chart.
pub const BAR_CHART_FILE: &str = "energy_comparison.svg";

/// File name of the scaling chart.
pub const SCALING_CHART_FILE: &str = "energy_scaling.svg";

const CHART_SIZE: (u32, u32) = (1000, 640);

fn chart_err<E: Display>(e: E) -> EnergyError {
    EnergyError::Chart(e.to_string())
}

/// (size, energy) pairs that can sit on log-log axes.
fn log_points(
    records: &[ScalingRecord],
    unit: EnergyUnit,
    energy: fn(&ScalingRecord) -> f64,
) -> Vec<(f64, f64)> {
    records
        .iter()
        .filter(|r| r.size > 0)
        .map(|r| (r.size as f64, energy(r)))
        .filter(|&(_, pj)| pj > 0.0)
        .map(|(n, pj)| (n, unit.from_picojoules(pj)))
        .collect()
}

/// Draws compute vs. memory energy (both regimes) for one matrix size.
pub fn render_energy_bars(eval: &WorkloadEvaluation, unit: EnergyUnit, path: &Path) -> Result<()> {
    let bars = [
        ("Compute", unit.from_picojoules(eval.compute_energy), BLUE),
        (
            "Memory (with reuse)",
            unit.from_picojoules(eval.memory_energy_with_reuse),
            GREEN,
        ),
        (
            "Memory (no reuse)",
            unit.from_picojoules(eval.memory_energy_no_reuse),
            RED,
        ),
    ];
    let peak = bars.iter().map(|b| b.1).fold(0.0, f64::max);
    let y_max = if peak > 0.0 { peak * 1.1 } else { 1.0 };

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Compute vs Memory Energy ({}x{})", eval.n, eval.n),
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d((0..bars.len() as i32).into_segmented(), 0f64..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(format!("Energy ({})", unit))
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => bars
                .get(*i as usize)
                .map(|b| b.0.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, (_, value, color))| {
            let i = i as i32;
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), *value),
                ],
                color.filled(),
            );
            bar.set_margin(0, 0, 20, 20);
            bar
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

/// Draws each energy quantity against matrix size on log-log axes.
///
/// Returns `false` without touching `path` when no record can be plotted.
pub fn render_scaling_curves(
    records: &[ScalingRecord],
    unit: EnergyUnit,
    path: &Path,
) -> Result<bool> {
    let series = [
        ("Compute", BLUE, log_points(records, unit, |r| r.compute_energy)),
        (
            "Memory (with reuse)",
            GREEN,
            log_points(records, unit, |r| r.memory_energy_with_reuse),
        ),
        (
            "Memory (no reuse)",
            RED,
            log_points(records, unit, |r| r.memory_energy_no_reuse),
        ),
    ];

    let bounds = series
        .iter()
        .flat_map(|s| s.2.iter())
        .fold(None, |acc, &(x, y)| match acc {
            None => Some((x, x, y, y)),
            Some((x_lo, x_hi, y_lo, y_hi)) => Some((
                f64::min(x_lo, x),
                f64::max(x_hi, x),
                f64::min(y_lo, y),
                f64::max(y_hi, y),
            )),
        });
    let Some((x_lo, x_hi, y_lo, y_hi)) = bounds else {
        return Ok(false);
    };

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Energy Consumption vs Matrix Size", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (x_lo / 2.0..x_hi * 2.0).log_scale(),
            (y_lo / 2.0..y_hi * 2.0).log_scale(),
        )
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Matrix size (N)")
        .y_desc(format!("Energy ({})", unit))
        .draw()
        .map_err(chart_err)?;

    for (label, color, data) in &series {
        let color = *color;
        chart
            .draw_series(LineSeries::new(data.iter().copied(), color.stroke_width(2)))
            .map_err(chart_err)?
            .label(*label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        chart
            .draw_series(data.iter().map(|&p| Circle::new(p, 4, color.filled())))
            .map_err(chart_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(true)
}

/// Renders both charts into `dir`, creating it if needed.
///
/// Returns the paths that were written.
pub fn render_all(
    eval: &WorkloadEvaluation,
    records: &[ScalingRecord],
    unit: EnergyUnit,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let bar_path = dir.join(BAR_CHART_FILE);
    render_energy_bars(eval, unit, &bar_path)?;
    info!(path = %bar_path.display(), "saved bar chart");
    written.push(bar_path);

    let scaling_path = dir.join(SCALING_CHART_FILE);
    if render_scaling_curves(records, unit, &scaling_path)? {
        info!(path = %scaling_path.display(), "saved scaling chart");
        written.push(scaling_path);
    } else {
        warn!("no plottable sweep points, skipping scaling chart");
    }

    Ok(written)
}
