//! How each tree state is drawn
//!
//! A fixed lookup table from [`TreeState`] to presentation attributes. The
//! simulation core knows nothing about it.

use forest_fire_core::{FireSimulation, GridPos, TreeState};
use std::fmt::Write;

/// Drawing attributes for one tree state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portrayal {
    /// Colour name for graphical front ends
    pub color: &'static str,
    /// Character used in text frames
    pub glyph: char,
    /// ANSI SGR colour code used in text frames
    pub ansi: &'static str,
}

const FINE: Portrayal = Portrayal {
    color: "Green",
    glyph: 'T',
    ansi: "32",
};

const BURNING: Portrayal = Portrayal {
    color: "Red",
    glyph: '*',
    ansi: "31",
};

const BURNED_OUT: Portrayal = Portrayal {
    color: "Gray",
    glyph: '.',
    ansi: "90",
};

/// Glyph for a cell with no tree
pub const EMPTY_GLYPH: char = ' ';

/// Look up how `state` is drawn
pub fn portrayal(state: TreeState) -> &'static Portrayal {
    match state {
        TreeState::Fine => &FINE,
        TreeState::Burning => &BURNING,
        TreeState::BurnedOut => &BURNED_OUT,
    }
}

/// One-line key of glyphs and colours
pub fn legend() -> String {
    TreeState::ALL
        .iter()
        .map(|&state| {
            let p = portrayal(state);
            format!("'{}' {:?} ({})", p.glyph, state, p.color)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text frame of the whole grid, north at the top
pub fn render_frame(sim: &FireSimulation, color: bool) -> String {
    let grid = sim.grid();
    let bytes_per_cell = if color { 12 } else { 1 };
    let mut frame = String::with_capacity((grid.width() + 1) * grid.height() * bytes_per_cell);
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            match sim.state_at(GridPos::new(x, y)) {
                Some(state) => {
                    let p = portrayal(state);
                    if color {
                        let _ = write!(frame, "\x1b[{}m{}\x1b[0m", p.ansi, p.glyph);
                    } else {
                        frame.push(p.glyph);
                    }
                }
                None => frame.push(EMPTY_GLYPH),
            }
        }
        frame.push('\n');
    }
    frame
}
