//! Steppable forest fire simulation
//!
//! [`FireSimulation`] owns the grid, the spread parameters and the random
//! source. Each call to [`FireSimulation::step`] runs one activation pass
//! (see [`scheduler`]) and then records the burned fraction.
//!
//! The simulation never stops on its own. [`FireSimulation::finished`]
//! reports when the configured horizon is reached; stepping further is
//! allowed and simply continues the run.

pub(crate) mod scheduler;
pub mod stats;

pub use stats::{RunSummary, StateCounts, StepOutcome};

use crate::config::{ActivationMode, ForestConfig};
use crate::core_types::{GridPos, Tree, TreeState};
use crate::error::ConfigError;
use crate::grid::ForestGrid;
use crate::physics::SpreadParams;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Forest fire cellular automaton
#[derive(Debug, Clone)]
pub struct FireSimulation {
    config: ForestConfig,
    params: SpreadParams,
    grid: ForestGrid,
    rng: StdRng,
    step_count: u32,
    counts: StateCounts,
    /// Burned fraction after each step; `history[i]` is after step `i + 1`
    history: Vec<f64>,
}

impl FireSimulation {
    /// Build a simulation from `config`.
    ///
    /// The grid is populated immediately from the seeded random source, and
    /// the same source then drives every step.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any field is out of range.
    pub fn new(config: ForestConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = ForestGrid::populate(config.width, config.height, config.density, &mut rng);
        let counts = StateCounts::tally(grid.trees());

        info!(
            "Created forest: {}x{} grid, {} trees, {} burning, density={:.2}",
            config.width,
            config.height,
            counts.total(),
            counts.burning,
            config.density
        );
        if counts.total() == 0 {
            info!("Forest is empty; burned fraction stays at 0");
        }

        Ok(Self {
            params: SpreadParams::from(&config),
            config,
            grid,
            rng,
            step_count: 0,
            counts,
            history: Vec::new(),
        })
    }

    /// Advance the fire by one step
    pub fn step(&mut self) -> StepOutcome {
        let outcome = scheduler::run_step(
            &mut self.grid,
            &self.params,
            self.config.activation,
            &mut self.rng,
        );
        self.step_count += 1;
        self.counts = StateCounts::tally(self.grid.trees());
        let burned_fraction = self.counts.burned_fraction();
        self.history.push(burned_fraction);

        debug!(
            "Step {}: burned_out={}, ignited={}, embers={}, burning={}, burned_fraction={:.4}",
            self.step_count,
            outcome.burned_out,
            outcome.ignited,
            outcome.ember_ignitions,
            self.counts.burning,
            burned_fraction
        );
        if self.step_count == self.config.horizon {
            info!(
                "Reached horizon of {} steps: burned_fraction={:.4}",
                self.config.horizon, burned_fraction
            );
        }
        outcome
    }

    /// Step until the horizon is reached and summarize the run.
    /// Returns immediately if it already has been.
    pub fn run_to_horizon(&mut self) -> RunSummary {
        while !self.finished() {
            self.step();
        }
        self.summary()
    }

    /// Snapshot of the run so far
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            steps: self.step_count,
            counts: self.counts,
            burned_fraction: self.burned_fraction(),
            fire_active: self.is_fire_active(),
        }
    }

    /// Steps taken so far
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Step count at which the run is complete
    pub fn horizon(&self) -> u32 {
        self.config.horizon
    }

    /// Has the run reached its horizon?
    pub fn finished(&self) -> bool {
        self.step_count >= self.config.horizon
    }

    /// Fraction of trees burned out (0.0 for an empty forest)
    pub fn burned_fraction(&self) -> f64 {
        self.counts.burned_fraction()
    }

    /// Burned fraction after every step taken, oldest first
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Current census of tree states
    pub fn counts(&self) -> StateCounts {
        self.counts
    }

    /// Number of trees in `state`
    pub fn count_state(&self, state: TreeState) -> usize {
        self.counts.get(state)
    }

    /// Any tree still burning?
    pub fn is_fire_active(&self) -> bool {
        self.counts.burning > 0
    }

    /// All trees with their positions and states
    pub fn trees(&self) -> &[Tree] {
        self.grid.trees()
    }

    /// State of the tree at `pos`, or `None` for an empty cell
    pub fn state_at(&self, pos: GridPos) -> Option<TreeState> {
        self.grid.tree_at(pos).map(Tree::state)
    }

    pub fn grid(&self) -> &ForestGrid {
        &self.grid
    }

    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    pub fn params(&self) -> &SpreadParams {
        &self.params
    }

    pub fn activation(&self) -> ActivationMode {
        self.config.activation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn certain_spread(size: usize) -> ForestConfig {
        ForestConfig::default()
            .with_size(size, size)
            .with_density(1.0)
            .with_probability_of_spread(100)
            .with_wind(0, 0)
            .with_big_jumps(false)
            .with_seed(7)
    }

    #[test]
    fn invalid_config_returns_no_simulation() {
        let result = FireSimulation::new(ForestConfig::default().with_density(2.0));
        assert_eq!(result.unwrap_err(), ConfigError::DensityOutOfRange(2.0));
    }

    #[test]
    fn starts_with_nothing_burned() {
        let sim = FireSimulation::new(certain_spread(5)).expect("valid config");
        assert_eq!(sim.step_count(), 0);
        assert_eq!(sim.burned_fraction(), 0.0);
        assert!(sim.history().is_empty());
        assert_eq!(sim.counts().burning, 5);
        assert!(!sim.finished());
    }

    #[test]
    fn step_updates_counter_and_history() {
        let mut sim = FireSimulation::new(certain_spread(5)).expect("valid config");
        let outcome = sim.step();
        assert_eq!(outcome.burned_out, sim.count_state(TreeState::BurnedOut));
        assert_eq!(sim.step_count(), 1);
        assert_eq!(sim.history(), &[sim.burned_fraction()]);
    }

    #[test]
    fn finished_tracks_horizon() {
        let mut sim = FireSimulation::new(certain_spread(4).with_horizon(3)).expect("valid config");
        let summary = sim.run_to_horizon();
        assert!(sim.finished());
        assert_eq!(summary.steps, 3);
        assert_eq!(sim.history().len(), 3);

        // Stepping beyond the horizon is permitted
        sim.step();
        assert_eq!(sim.step_count(), 4);
        assert!(sim.finished());
    }

    #[test]
    fn state_lookup_by_position() {
        let sim = FireSimulation::new(certain_spread(3)).expect("valid config");
        assert_eq!(sim.state_at(GridPos::new(0, 1)), Some(TreeState::Burning));
        assert_eq!(sim.state_at(GridPos::new(2, 1)), Some(TreeState::Fine));
        assert_eq!(sim.state_at(GridPos::new(3, 1)), None);
    }
}
