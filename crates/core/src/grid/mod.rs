//! Grid storage and forest population

pub mod forest_grid;

// Re-export main types
pub use forest_grid::*;
