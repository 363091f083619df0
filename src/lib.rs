//! Memory-Wall Energy Model Library.
//!
//! This crate estimates the energy of a dense N×N matrix multiplication on an
//! AI accelerator, splitting it into arithmetic (multiply-accumulate) energy
//! and the energy of moving operands through an SRAM/DRAM hierarchy.
//!
//! # Model
//!
//! * **Compute**: `n³` MACs at a fixed energy per MAC.
//! * **Memory**: `2·n²` reads, each charged a blend of SRAM and DRAM access
//!   cost weighted by a fixed hit fraction. There is no cache state; the
//!   hit fraction is a declared modelling approximation.
//! * **Regimes**: "with reuse" (90% SRAM hits) and "no reuse" (all DRAM).
//!
//! # Modules
//!
//! * `common`: Error handling and energy units.
//! * `config`: Configuration loading and parsing.
//! * `model`: Energy formulas, workload evaluation and scaling sweeps.
//! * `report`: Console, chart and JSON presentation of results.

/// Shared error type and energy unit definitions.
///
/// Provides the crate-wide `EnergyError`/`Result` pair and the `EnergyUnit`
/// conversions used at the presentation boundary.
pub mod common;

/// Configuration system for energy costs, cache profiles and report output.
///
/// Loads and parses TOML configuration files so alternative hardware
/// assumptions can be evaluated without code changes.
pub mod config;

/// Energy model, workload calculator, scaling analyzer and architecture presets.
///
/// All operations are pure functions of their inputs and an immutable
/// `EnergyModel`, and are safe to call from any thread.
pub mod model;

/// Presentation of computed results.
///
/// Formats console reports, renders SVG charts and serializes JSON bundles.
pub mod report;
