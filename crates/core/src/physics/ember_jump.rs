//! Long-range ember jumps ("big jumps")
//!
//! A burning tree throws one ember per activation to the cell at
//!
//! ```text
//! (x + floor(west_wind / 8), y + floor(south_wind / 8))
//! ```
//!
//! Division rounds toward negative infinity, so any negative component
//! moves the target at least one cell (a wind of -1 gives an offset of -1,
//! while +1 gives 0). With calm or light positive wind the target is the
//! burning tree itself, which can never be re-ignited.
//!
//! A fine tree at the target ignites with the base probability; the wind
//! bonus does not apply.

use crate::core_types::GridPos;
use crate::grid::ForestGrid;

/// Wind speed per cell of ember travel
pub const EMBER_JUMP_DIVISOR: i32 = 8;

/// Cell offset `(dx, dy)` travelled by an ember
pub fn ember_jump_offset(south_wind: i32, west_wind: i32) -> (i64, i64) {
    // div_euclid equals floor division for a positive divisor
    (
        i64::from(west_wind.div_euclid(EMBER_JUMP_DIVISOR)),
        i64::from(south_wind.div_euclid(EMBER_JUMP_DIVISOR)),
    )
}

/// Landing cell of an ember thrown from `from`, if it stays on the grid
pub fn ember_jump_target(
    grid: &ForestGrid,
    from: GridPos,
    south_wind: i32,
    west_wind: i32,
) -> Option<GridPos> {
    let (dx, dy) = ember_jump_offset(south_wind, west_wind);
    grid.offset(from, dx, dy)
}

/// Ignition chance (percent) at the landing cell
pub fn ember_jump_probability(base_probability: u32) -> u32 {
    base_probability
}
