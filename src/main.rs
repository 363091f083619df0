//! Memory-Wall Energy CLI.
//!
//! Evaluates one matrix size, sweeps a list of sizes, compares hardware
//! presets, then prints the results and optionally saves charts.
//!
//! # Usage
//!
//! ```text
//! memwall [--config <file.toml>] [-n <size>] [--sizes 64,128,256] [--json] [--no-charts]
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use memwall_energy::common::{EnergyUnit, Result};
use memwall_energy::config::Config;
use memwall_energy::model::{compare_architectures, ScalingAnalyzer, WorkloadEnergyCalculator};
use memwall_energy::report::{chart, Report};

/// Command-line arguments for the energy model.
///
/// Every flag overrides the corresponding config file entry.
#[derive(Parser, Debug)]
#[command(author, version, about = "Compute vs. memory energy for matrix multiplication")]
struct Args {
    /// TOML configuration file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Matrix dimension for the point evaluation.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// Comma-separated matrix dimensions for the scaling sweep.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    sizes: Option<Vec<i64>>,

    /// Directory that receives the SVG charts.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Display unit: pJ, nJ, uJ, mJ or J.
    #[arg(long)]
    unit: Option<EnergyUnit>,

    /// Skip chart rendering.
    #[arg(long)]
    no_charts: bool,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[!] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(size) = args.size {
        config.workload.size = size;
    }
    if let Some(sizes) = args.sizes {
        config.workload.sweep_sizes = sizes;
    }
    if let Some(unit) = args.unit {
        config.report.unit = unit;
    }
    if args.no_charts {
        config.report.charts = false;
    }

    let model = config.energy_model()?;
    let calculator = WorkloadEnergyCalculator::new(model);
    let analyzer = ScalingAnalyzer::new(calculator);

    let evaluation = calculator.evaluate(config.workload.size)?;
    let records = analyzer.sweep(&config.workload.sweep_sizes)?;
    let projections = ScalingAnalyzer::theoretical_projection(&records);
    let architectures =
        compare_architectures(&config.architecture_profiles()?, config.workload.size)?;

    let report = Report::new(
        config.report.unit,
        evaluation,
        records,
        projections,
        architectures,
    );

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    if config.report.charts {
        let dir = args
            .output_dir
            .unwrap_or_else(|| Path::new(&config.report.output_dir).to_path_buf());
        let written = chart::render_all(&report.evaluation, &report.scaling, report.unit, &dir)?;
        info!(charts = written.len(), dir = %dir.display(), "charts written");
        if !args.json {
            for path in &written {
                println!("[*] Saved {}", path.display());
            }
        }
    }

    Ok(())
}
