//! Energy model for dense matrix multiplication.
//!
//! The model is built bottom-up:
//!
//! * `costs`: per-event energy costs, cache hit profiles and the `EnergyModel`
//!   formulas that price MACs and memory reads.
//! * `workload`: turns a matrix dimension into operation counts and energies.
//! * `scaling`: sweeps the workload calculation across matrix sizes.
//! * `architecture`: compares memory energy across hardware presets.

pub mod architecture;
pub mod costs;
pub mod scaling;
pub mod workload;

pub use architecture::{compare_architectures, ArchitectureComparison, ArchitectureProfile};
pub use costs::{CacheProfile, EnergyCosts, EnergyModel};
pub use scaling::{Projection, ScalingAnalyzer, ScalingRecord};
pub use workload::{WorkloadEnergyCalculator, WorkloadEvaluation};
