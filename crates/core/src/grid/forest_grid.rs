//! Bounded 2D forest grid
//!
//! The grid owns every tree in a flat `Vec` (in placement order) and keeps a
//! row-major slot table mapping each coordinate to the index of the tree
//! standing there, if any. Trees never reference each other; all neighbour
//! lookups go through the slot table.
//!
//! Edges are hard boundaries: there is no wraparound.

use crate::core_types::{GridPos, Tree, TreeState};
use rand::Rng;
use std::array;
use std::iter::Flatten;

/// Von Neumann neighbourhood offsets, in lookup order: west, south, north, east
pub const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Fixed-size grid holding at most one tree per cell
#[derive(Debug, Clone)]
pub struct ForestGrid {
    width: usize,
    height: usize,
    /// Tree index per cell, row-major: `[y * width + x]`
    slots: Vec<Option<u32>>,
    /// Trees in placement order
    trees: Vec<Tree>,
}

impl ForestGrid {
    /// Create an empty grid. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            slots: vec![None; width * height],
            trees: Vec::new(),
        }
    }

    /// Fill a new grid with trees.
    ///
    /// Cells are visited column by column (`x` outer, `y` inner) and each one
    /// independently receives a tree with probability `density`. Trees in
    /// column 0 start burning, all others start fine. Cells left empty here
    /// stay empty for the grid's lifetime.
    pub fn populate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        density: f64,
        rng: &mut R,
    ) -> Self {
        let mut grid = Self::new(width, height);
        for x in 0..width {
            for y in 0..height {
                if rng.random::<f64>() < density {
                    grid.place(GridPos::new(x, y));
                }
            }
        }
        grid
    }

    /// Put a new tree at `pos`. Does nothing if the cell is occupied.
    fn place(&mut self, pos: GridPos) {
        let slot = self.slot_index(pos);
        if self.slots[slot].is_none() {
            self.slots[slot] = Some(self.trees.len() as u32);
            self.trees.push(Tree::new(pos));
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of trees on the grid
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// All trees in placement order
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    /// Tree by placement index
    pub fn tree(&self, index: usize) -> &Tree {
        &self.trees[index]
    }

    pub(crate) fn tree_mut(&mut self, index: usize) -> &mut Tree {
        &mut self.trees[index]
    }

    /// Is `(x, y)` inside the grid?
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Position displaced by `(dx, dy)`, or `None` if that leaves the grid
    pub fn offset(&self, pos: GridPos, dx: i64, dy: i64) -> Option<GridPos> {
        let x = pos.x as i64 + dx;
        let y = pos.y as i64 + dy;
        self.in_bounds(x, y)
            .then(|| GridPos::new(x as usize, y as usize))
    }

    /// Index of the tree standing at `pos`, if any
    pub fn tree_index_at(&self, pos: GridPos) -> Option<usize> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        self.slots[self.slot_index(pos)].map(|i| i as usize)
    }

    /// Tree standing at `pos`, if any
    pub fn tree_at(&self, pos: GridPos) -> Option<&Tree> {
        self.tree_index_at(pos).map(|i| &self.trees[i])
    }

    /// True if no tree stands at `pos` (or `pos` is off the grid)
    pub fn is_empty_at(&self, pos: GridPos) -> bool {
        self.tree_index_at(pos).is_none()
    }

    /// In-bounds von Neumann neighbours of `pos` (occupied or not)
    ///
    /// The iterator owns its positions, so the grid may be mutated while
    /// walking it.
    pub fn neighbors(&self, pos: GridPos) -> Flatten<array::IntoIter<Option<GridPos>, 4>> {
        let cells = NEIGHBOR_OFFSETS.map(|(dx, dy)| self.offset(pos, dx, dy));
        cells.into_iter().flatten()
    }

    /// Number of trees currently in `state`
    pub fn count_state(&self, state: TreeState) -> usize {
        self.trees.iter().filter(|t| t.state == state).count()
    }

    #[inline]
    fn slot_index(&self, pos: GridPos) -> usize {
        pos.y * self.width + pos.x
    }
}
