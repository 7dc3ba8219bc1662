//! Core types shared by the grid, the spread rules and the scheduler

pub mod position;
pub mod tree;

// Re-export
pub use position::GridPos;
pub use tree::{Tree, TreeState};
