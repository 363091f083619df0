//! Common utilities and types used throughout the energy model.
//!
//! This module provides the error type shared by the model, configuration
//! and presentation layers, and the energy unit definitions used when
//! converting internal picojoule figures for display.

/// Error types for input validation, configuration and rendering.
pub mod error;

/// Energy unit definitions and conversions.
pub mod units;

pub use error::{EnergyError, Result};
pub use units::EnergyUnit;
