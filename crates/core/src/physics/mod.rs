//! Fire spread rules
//!
//! Two pure rules decide where fire goes from a burning tree:
//!
//! - [`ignition`]: wind-gated spread to the four axis-aligned neighbours
//! - [`ember_jump`]: a single long-range attempt at a wind-scaled offset
//!
//! Both yield integer percentages. A candidate ignites when a uniform draw
//! from `0..100` is strictly below that percentage (see [`roll_ignition`]),
//! so 100 or more always ignites and 0 never does.

pub mod ember_jump;
pub mod ignition;

pub use ember_jump::{
    ember_jump_offset, ember_jump_probability, ember_jump_target, EMBER_JUMP_DIVISOR,
};
pub use ignition::{ignition_probability, Direction};

use crate::config::ForestConfig;
use crate::core_types::GridPos;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Spread parameters shared by every tree of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadParams {
    /// Base ignition chance (percent)
    pub probability_of_spread: u32,
    /// Wind from the south (positive pushes fire north)
    pub south_wind_speed: i32,
    /// Wind from the west (positive pushes fire east)
    pub west_wind_speed: i32,
    /// Ember jumps enabled
    pub big_jumps: bool,
}

impl SpreadParams {
    /// Ignition chance from `from` to the adjacent cell `to`
    pub fn ignition_probability(&self, from: GridPos, to: GridPos) -> u32 {
        ignition_probability(
            from,
            to,
            self.probability_of_spread,
            self.south_wind_speed,
            self.west_wind_speed,
        )
    }
}

impl From<&ForestConfig> for SpreadParams {
    fn from(config: &ForestConfig) -> Self {
        Self {
            probability_of_spread: config.probability_of_spread,
            south_wind_speed: config.south_wind_speed,
            west_wind_speed: config.west_wind_speed,
            big_jumps: config.big_jumps,
        }
    }
}

/// Draw once from `0..100` and compare against `probability` (percent)
#[inline]
pub fn roll_ignition<R: Rng + ?Sized>(rng: &mut R, probability: u32) -> bool {
    rng.random_range(0..100_u32) < probability
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn certain_and_impossible_rolls() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            assert!(roll_ignition(&mut rng, 100));
            assert!(roll_ignition(&mut rng, 125));
            assert!(!roll_ignition(&mut rng, 0));
        }
    }

    #[test]
    fn roll_matches_probability_on_average() {
        let mut rng = StdRng::seed_from_u64(11);
        let hits = (0..20_000).filter(|_| roll_ignition(&mut rng, 25)).count();
        let rate = hits as f64 / 20_000.0;
        assert!((0.23..0.27).contains(&rate), "got {rate}");
    }

    #[test]
    fn params_follow_config() {
        let config = ForestConfig::default()
            .with_probability_of_spread(40)
            .with_wind(-3, 7)
            .with_big_jumps(false);
        let params = SpreadParams::from(&config);
        assert_eq!(params.probability_of_spread, 40);
        assert_eq!(params.south_wind_speed, -3);
        assert_eq!(params.west_wind_speed, 7);
        assert!(!params.big_jumps);
    }
}
