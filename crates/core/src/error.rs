//! Configuration errors
//!
//! Construction is the only fallible operation: once a simulation exists,
//! stepping it cannot fail.

use thiserror::Error;

/// Reasons a [`ForestConfig`](crate::ForestConfig) is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Width or height of zero
    #[error("grid {name} must be positive, got 0")]
    ZeroDimension { name: &'static str },

    /// `width * height` does not fit in memory addressing
    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge { width: usize, height: usize },

    /// Density must be a finite fraction in [0, 1]
    #[error("density must be within [0, 1], got {0}")]
    DensityOutOfRange(f64),

    /// Spread probability is a percentage
    #[error("probability_of_spread must be within [0, 100], got {0}")]
    ProbabilityOutOfRange(u32),

    /// Wind components are limited to the supported speed range
    #[error("{name} must be within [-{max}, {max}], got {value}")]
    WindOutOfRange {
        name: &'static str,
        value: i32,
        max: i32,
    },

    /// A run needs at least one step
    #[error("horizon must be at least one step")]
    ZeroHorizon,
}
