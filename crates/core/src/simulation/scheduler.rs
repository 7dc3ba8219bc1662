//! Per-step random activation
//!
//! Every step draws a fresh uniform permutation of all trees and visits them
//! in that order. A tree that is burning on its turn:
//!
//! 1. tries to ignite each fine axis-aligned neighbour,
//! 2. throws one ember if big jumps are enabled,
//! 3. burns out.
//!
//! In [`ActivationMode::Cascade`] a tree ignited earlier in the same step
//! still acts when its own turn comes, so a front can cross several cells in
//! one step depending on the draw. [`ActivationMode::Snapshot`] restricts the
//! step to trees that were burning when it began.

use crate::config::ActivationMode;
use crate::grid::ForestGrid;
use crate::physics::{ember_jump_probability, ember_jump_target, roll_ignition, SpreadParams};
use crate::simulation::stats::StepOutcome;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// Fresh random visiting order over `tree_count` trees
pub(crate) fn activation_order<R: Rng + ?Sized>(tree_count: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tree_count).collect();
    order.shuffle(rng);
    order
}

/// Advance every tree of `grid` by one step
pub(crate) fn run_step<R: Rng + ?Sized>(
    grid: &mut ForestGrid,
    params: &SpreadParams,
    mode: ActivationMode,
    rng: &mut R,
) -> StepOutcome {
    let order = activation_order(grid.tree_count(), rng);
    let burning_at_start: Option<Vec<bool>> = match mode {
        ActivationMode::Cascade => None,
        ActivationMode::Snapshot => Some(grid.trees().iter().map(|t| t.is_burning()).collect()),
    };

    let mut outcome = StepOutcome::default();
    for index in order {
        if !grid.tree(index).is_burning() {
            continue;
        }
        if let Some(eligible) = &burning_at_start {
            if !eligible[index] {
                continue;
            }
        }
        burn(grid, index, params, rng, &mut outcome);
    }
    outcome
}

/// Spread from the burning tree at `index`, then burn it out
fn burn<R: Rng + ?Sized>(
    grid: &mut ForestGrid,
    index: usize,
    params: &SpreadParams,
    rng: &mut R,
    outcome: &mut StepOutcome,
) {
    let from = grid.tree(index).position();

    for to in grid.neighbors(from) {
        let Some(neighbor) = grid.tree_index_at(to) else {
            continue;
        };
        if !grid.tree(neighbor).is_fine() {
            continue;
        }
        let probability = params.ignition_probability(from, to);
        if roll_ignition(rng, probability) && grid.tree_mut(neighbor).ignite() {
            outcome.ignited += 1;
        }
    }

    if params.big_jumps {
        let target = ember_jump_target(grid, from, params.south_wind_speed, params.west_wind_speed)
            .and_then(|pos| grid.tree_index_at(pos));
        if let Some(target) = target {
            if grid.tree(target).is_fine()
                && roll_ignition(rng, ember_jump_probability(params.probability_of_spread))
                && grid.tree_mut(target).ignite()
            {
                trace!(
                    "Ember jump from {} ignited {}",
                    from,
                    grid.tree(target).position()
                );
                outcome.ember_ignitions += 1;
            }
        }
    }

    grid.tree_mut(index).burn_out();
    outcome.burned_out += 1;
}
