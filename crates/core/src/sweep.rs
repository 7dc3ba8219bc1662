//! Parallel parameter sweeps
//!
//! A sweep runs many independent simulations to the horizon and averages
//! their burned fractions. Each run owns its own grid and random source, so
//! runs are spread across threads with rayon; a single simulation is never
//! stepped concurrently.
//!
//! Run `r` of configuration `i` is seeded from `base_seed` through
//! [`run_seed`], which makes a sweep reproducible regardless of how rayon
//! schedules it.

use crate::config::ForestConfig;
use crate::error::ConfigError;
use crate::simulation::FireSimulation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Aggregate result for one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Configuration the runs used (seed field as given, per-run seeds differ)
    pub config: ForestConfig,
    /// Final burned fraction of every run, in run order
    pub burned_fractions: Vec<f64>,
}

impl SweepResult {
    pub fn runs(&self) -> usize {
        self.burned_fractions.len()
    }

    /// Mean final burned fraction (0.0 with no runs)
    pub fn mean(&self) -> f64 {
        if self.burned_fractions.is_empty() {
            return 0.0;
        }
        self.burned_fractions.iter().sum::<f64>() / self.burned_fractions.len() as f64
    }

    pub fn min(&self) -> f64 {
        self.burned_fractions.iter().copied().fold(f64::NAN, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.burned_fractions.iter().copied().fold(f64::NAN, f64::max)
    }

    /// Sample standard deviation (0.0 with fewer than two runs)
    pub fn std_dev(&self) -> f64 {
        let n = self.burned_fractions.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .burned_fractions
            .iter()
            .map(|f| (f - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;
        variance.sqrt()
    }
}

/// Seed for run `run` of configuration `config_index`.
///
/// The three values fill distinct words of a `StdRng` seed, so every
/// `(base_seed, config_index, run)` triple gets its own stream.
pub fn run_seed(base_seed: u64, config_index: usize, run: usize) -> u64 {
    let mut seed = <StdRng as SeedableRng>::Seed::default();
    seed[..8].copy_from_slice(&base_seed.to_le_bytes());
    seed[8..16].copy_from_slice(&(config_index as u64).to_le_bytes());
    seed[16..24].copy_from_slice(&(run as u64).to_le_bytes());
    StdRng::from_seed(seed).random()
}

/// Copies of `base` with each density in `densities`
pub fn density_sweep(base: &ForestConfig, densities: &[f64]) -> Vec<ForestConfig> {
    densities
        .iter()
        .map(|&density| base.clone().with_density(density))
        .collect()
}

/// Evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = points - 1;
            let step = (end - start) / last as f64;
            // The final point is pinned so rounding cannot step past `end`
            (0..points)
                .map(|i| if i == last { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Run every configuration `runs` times in parallel.
///
/// # Errors
///
/// All configurations are validated before any run starts; the first
/// invalid one aborts the sweep.
pub fn run_sweep(
    configs: &[ForestConfig],
    runs: usize,
    base_seed: u64,
) -> Result<Vec<SweepResult>, ConfigError> {
    for config in configs {
        config.validate()?;
    }
    info!(
        "Starting sweep: {} configurations x {} runs",
        configs.len(),
        runs
    );

    configs
        .par_iter()
        .enumerate()
        .map(|(index, config)| -> Result<SweepResult, ConfigError> {
            let burned_fractions = (0..runs)
                .into_par_iter()
                .map(|run| {
                    let seeded = config.clone().with_seed(run_seed(base_seed, index, run));
                    FireSimulation::new(seeded).map(|mut sim| sim.run_to_horizon().burned_fraction)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SweepResult {
                config: config.clone(),
                burned_fractions,
            })
        })
        .collect()
}
