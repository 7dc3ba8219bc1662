//! Per-state census and run summaries

use crate::core_types::{Tree, TreeState};
use serde::{Deserialize, Serialize};

/// Number of trees in each fire state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateCounts {
    pub fine: usize,
    pub burning: usize,
    pub burned_out: usize,
}

impl StateCounts {
    /// Count the states of `trees`
    pub fn tally<'a>(trees: impl IntoIterator<Item = &'a Tree>) -> Self {
        let mut counts = Self::default();
        for tree in trees {
            match tree.state() {
                TreeState::Fine => counts.fine += 1,
                TreeState::Burning => counts.burning += 1,
                TreeState::BurnedOut => counts.burned_out += 1,
            }
        }
        counts
    }

    /// Total number of trees
    pub fn total(&self) -> usize {
        self.fine + self.burning + self.burned_out
    }

    /// Count for a single state
    pub fn get(&self, state: TreeState) -> usize {
        match state {
            TreeState::Fine => self.fine,
            TreeState::Burning => self.burning,
            TreeState::BurnedOut => self.burned_out,
        }
    }

    /// Fraction of trees burned out, or 0.0 for an empty forest
    pub fn burned_fraction(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.burned_out as f64 / total as f64
        }
    }
}

/// Changes made by a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Trees that acted (were burning on their turn) and burned out
    pub burned_out: usize,
    /// Fine trees set alight by neighbour spread
    pub ignited: usize,
    /// Fine trees set alight by ember jumps
    pub ember_ignitions: usize,
}

impl StepOutcome {
    /// All new ignitions this step
    pub fn total_ignitions(&self) -> usize {
        self.ignited + self.ember_ignitions
    }
}

/// Final state of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Steps taken
    pub steps: u32,
    /// Census after the last step
    pub counts: StateCounts,
    /// Burned fraction after the last step
    pub burned_fraction: f64,
    /// Some trees were still burning when the run ended
    pub fire_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::GridPos;

    #[test]
    fn empty_forest_has_zero_burned_fraction() {
        let counts = StateCounts::tally(std::iter::empty::<&Tree>());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.burned_fraction(), 0.0);
    }

    #[test]
    fn tally_counts_each_state() {
        let mut trees: Vec<Tree> = (0..4).map(|x| Tree::new(GridPos::new(x, 0))).collect();
        // x = 0 starts burning
        trees[1].ignite();
        trees[0].burn_out();

        let counts = StateCounts::tally(&trees);
        assert_eq!(counts.fine, 2);
        assert_eq!(counts.burning, 1);
        assert_eq!(counts.burned_out, 1);
        assert_eq!(counts.get(TreeState::Fine), 2);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.burned_fraction(), 0.25);
    }
}
