//! Error Definitions.
//!
//! Every fallible operation in the crate reports through `EnergyError`.
//! Model operations only ever fail on input validation; the remaining
//! variants belong to configuration loading and report output.

use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EnergyError>;

/// Errors raised by the energy model and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum EnergyError {
    /// A matrix dimension was negative.
    #[error("invalid matrix size {0}: dimension must be non-negative")]
    InvalidSize(i64),

    /// Energy costs that are non-positive, non-finite, or have SRAM above DRAM.
    #[error("invalid energy costs: {0}")]
    InvalidCosts(String),

    /// A cache hit fraction outside `[0, 1]`.
    #[error("invalid cache profile: {0}")]
    InvalidProfile(String),

    #[error("failed to read config '{}': {}", .path.display(), .source)]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
