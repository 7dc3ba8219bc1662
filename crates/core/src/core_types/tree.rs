//! Trees and their fire state
//!
//! A tree only ever moves forward through its life cycle:
//!
//! ```text
//! Fine ──ignite──▶ Burning ──burn_out──▶ BurnedOut
//! ```
//!
//! Trees store nothing but their coordinate and state. The spread parameters
//! live once on the simulation and are handed to the rules on every step.

use super::GridPos;
use serde::{Deserialize, Serialize};

/// Fire state of a single tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeState {
    /// Unburned fuel, can be ignited
    Fine,
    /// Actively burning; spreads on its next activation, then burns out
    Burning,
    /// Consumed; terminal
    BurnedOut,
}

impl TreeState {
    /// All states in life-cycle order
    pub const ALL: [TreeState; 3] = [TreeState::Fine, TreeState::Burning, TreeState::BurnedOut];

    /// Position in the life cycle (0 = fine, 2 = burned out)
    #[must_use]
    pub const fn stage(self) -> u8 {
        match self {
            TreeState::Fine => 0,
            TreeState::Burning => 1,
            TreeState::BurnedOut => 2,
        }
    }

    /// True if moving from `self` to `next` never goes backwards
    #[must_use]
    pub const fn can_become(self, next: TreeState) -> bool {
        next.stage() >= self.stage()
    }
}

/// A tree occupying one grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub(crate) position: GridPos,
    pub(crate) state: TreeState,
}

impl Tree {
    /// Create a tree. Trees in the first column start the fire front.
    pub(crate) fn new(position: GridPos) -> Self {
        let state = if position.x == 0 {
            TreeState::Burning
        } else {
            TreeState::Fine
        };
        Self { position, state }
    }

    /// Grid coordinate (fixed for the tree's lifetime)
    pub fn position(&self) -> GridPos {
        self.position
    }

    /// Current fire state
    pub fn state(&self) -> TreeState {
        self.state
    }

    pub fn is_fine(&self) -> bool {
        self.state == TreeState::Fine
    }

    pub fn is_burning(&self) -> bool {
        self.state == TreeState::Burning
    }

    pub fn is_burned_out(&self) -> bool {
        self.state == TreeState::BurnedOut
    }

    /// Set a fine tree alight. Returns false (and changes nothing) for any
    /// other state.
    pub(crate) fn ignite(&mut self) -> bool {
        if self.state == TreeState::Fine {
            self.state = TreeState::Burning;
            true
        } else {
            false
        }
    }

    /// Finish burning. Only burning trees burn out.
    pub(crate) fn burn_out(&mut self) {
        if self.state == TreeState::Burning {
            self.state = TreeState::BurnedOut;
        }
    }
}
