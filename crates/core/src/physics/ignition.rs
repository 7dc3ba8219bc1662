//! Wind-gated neighbour ignition
//!
//! Wind adds its speed to the base chance only in the direction it blows.
//! Spread against a wind component is impossible, however weak the wind:
//!
//! | neighbour | open when            | probability              |
//! |-----------|----------------------|--------------------------|
//! | west      | `west_wind <= 0`     | `base + |west_wind|`     |
//! | east      | `west_wind >= 0`     | `base + |west_wind|`     |
//! | north     | `south_wind >= 0`    | `base + |south_wind|`    |
//! | south     | `south_wind <= 0`    | `base + |south_wind|`    |
//!
//! With no wind every direction gets the base chance. Results are not
//! clamped to 100.

use crate::core_types::GridPos;
use std::cmp::Ordering;

/// Direction of a neighbour relative to the burning tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    West,
    East,
    North,
    South,
}

impl Direction {
    /// Classify `to` relative to `from`.
    ///
    /// The x axis is checked first, so only axis-aligned neighbours have a
    /// meaningful answer. Returns `None` when both positions coincide.
    pub fn between(from: GridPos, to: GridPos) -> Option<Self> {
        match to.x.cmp(&from.x) {
            Ordering::Less => Some(Direction::West),
            Ordering::Greater => Some(Direction::East),
            Ordering::Equal => match to.y.cmp(&from.y) {
                Ordering::Greater => Some(Direction::North),
                Ordering::Less => Some(Direction::South),
                Ordering::Equal => None,
            },
        }
    }
}

/// Ignition chance (percent) from the burning tree at `from` to the
/// neighbour at `to`.
pub fn ignition_probability(
    from: GridPos,
    to: GridPos,
    base_probability: u32,
    south_wind: i32,
    west_wind: i32,
) -> u32 {
    let (open, wind) = match Direction::between(from, to) {
        Some(Direction::West) => (west_wind <= 0, west_wind),
        Some(Direction::East) => (west_wind >= 0, west_wind),
        Some(Direction::North) => (south_wind >= 0, south_wind),
        Some(Direction::South) => (south_wind <= 0, south_wind),
        None => return 0,
    };
    if open {
        base_probability + wind.unsigned_abs()
    } else {
        0
    }
}
