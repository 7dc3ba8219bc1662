//! Forest Fire Simulation Core Library
//!
//! A grid-based cellular automaton for wildfire spread through a forest.
//! Trees are placed at random with a configured density, the first column
//! is set alight, and every step each burning tree may ignite its fine
//! neighbours before burning out.
//!
//! ## Spread model
//!
//! - Four-neighbour spread with a base probability (percent)
//! - Two signed wind components that add a bonus downwind and block
//!   upwind spread completely
//! - Optional ember jumps to a wind-scaled offset
//! - Random activation order redrawn every step
//!
//! The single output metric is the fraction of trees burned out, tracked
//! after every step up to a fixed horizon.
//!
//! ```
//! use forest_fire_core::{FireSimulation, ForestConfig};
//!
//! let config = ForestConfig::default().with_wind(0, 10).with_seed(1);
//! let mut sim = FireSimulation::new(config)?;
//! while !sim.finished() {
//!     sim.step();
//! }
//! assert!((0.0..=1.0).contains(&sim.burned_fraction()));
//! # Ok::<(), forest_fire_core::ConfigError>(())
//! ```

// Core types and configuration
pub mod config;
pub mod core_types;
pub mod error;

// Simulation modules
pub mod grid;
pub mod physics;
pub mod simulation;
pub mod sweep;

// Re-export core types
pub use config::{ActivationMode, ForestConfig};
pub use core_types::{GridPos, Tree, TreeState};
pub use error::ConfigError;

// Re-export simulation types
pub use grid::ForestGrid;
pub use physics::SpreadParams;
pub use simulation::{FireSimulation, RunSummary, StateCounts, StepOutcome};
pub use sweep::{run_sweep, SweepResult};
