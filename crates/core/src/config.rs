//! Simulation configuration
//!
//! [`ForestConfig`] carries every tunable of a run. It deserializes from any
//! serde format with missing fields taking their defaults, so a config file
//! only needs the values it changes.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default grid width and height (cells)
pub const DEFAULT_GRID_SIZE: usize = 50;

/// Default tree placement probability
pub const DEFAULT_DENSITY: f64 = 0.60;

/// Default base spread probability (percent)
pub const DEFAULT_PROBABILITY_OF_SPREAD: u32 = 69;

/// Number of steps after which a run is complete
pub const DEFAULT_HORIZON: u32 = 50;

/// Largest accepted wind component magnitude
pub const MAX_WIND_SPEED: i32 = 25;

/// Spread probabilities are percentages
pub const MAX_PROBABILITY: u32 = 100;

/// How burning trees are chosen for activation within a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationMode {
    /// Every tree is visited once in a fresh random order. A tree ignited
    /// earlier in the step still acts if its turn comes later, so fire can
    /// travel several cells per step.
    #[default]
    Cascade,
    /// Only trees burning when the step starts act. Fire advances at most
    /// one cell (or one ember jump) per step.
    Snapshot,
}

/// Parameters of a single forest fire run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Probability that a cell holds a tree (0-1)
    pub density: f64,
    /// Base ignition chance between neighbours (percent)
    pub probability_of_spread: u32,
    /// Wind from the south; negative values blow from the north
    pub south_wind_speed: i32,
    /// Wind from the west; negative values blow from the east
    pub west_wind_speed: i32,
    /// Enable long-range ember jumps
    pub big_jumps: bool,
    /// Steps until the run counts as finished
    pub horizon: u32,
    /// RNG seed, `None` draws one from the OS
    pub seed: Option<u64>,
    /// Activation order within a step
    pub activation: ActivationMode,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            density: DEFAULT_DENSITY,
            probability_of_spread: DEFAULT_PROBABILITY_OF_SPREAD,
            south_wind_speed: 0,
            west_wind_speed: 0,
            big_jumps: true,
            horizon: DEFAULT_HORIZON,
            seed: None,
            activation: ActivationMode::Cascade,
        }
    }
}

impl ForestConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_probability_of_spread(mut self, probability: u32) -> Self {
        self.probability_of_spread = probability;
        self
    }

    /// Set both wind components at once
    pub fn with_wind(mut self, south_wind_speed: i32, west_wind_speed: i32) -> Self {
        self.south_wind_speed = south_wind_speed;
        self.west_wind_speed = west_wind_speed;
        self
    }

    pub fn with_big_jumps(mut self, big_jumps: bool) -> Self {
        self.big_jumps = big_jumps;
        self
    }

    pub fn with_horizon(mut self, horizon: u32) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_activation(mut self, activation: ActivationMode) -> Self {
        self.activation = activation;
        self
    }

    /// Check every field against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking dimensions first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { name: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { name: "height" });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange(self.density));
        }
        if self.probability_of_spread > MAX_PROBABILITY {
            return Err(ConfigError::ProbabilityOutOfRange(
                self.probability_of_spread,
            ));
        }
        check_wind("south_wind_speed", self.south_wind_speed)?;
        check_wind("west_wind_speed", self.west_wind_speed)?;
        if self.horizon == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        Ok(())
    }
}

fn check_wind(name: &'static str, value: i32) -> Result<(), ConfigError> {
    if !(-MAX_WIND_SPEED..=MAX_WIND_SPEED).contains(&value) {
        return Err(ConfigError::WindOutOfRange {
            name,
            value,
            max: MAX_WIND_SPEED,
        });
    }
    Ok(())
}
