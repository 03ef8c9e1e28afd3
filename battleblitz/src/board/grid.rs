//! Storage for the cells of a single board.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{CellState, Coordinate, Dimensions};

/// Fixed-size grid of [`CellState`]s laid out row-major.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid {
    /// Dimensions of this grid.
    pub(super) dim: Dimensions,
    /// Cells that make up this grid.
    cells: Box<[CellState]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| CellState::Empty).collect();
        Self { dim, cells }
    }

    /// Get the state of the cell at the given [`Coordinate`], or `None` if it is off the
    /// grid.
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&CellState> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut CellState> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = CellState;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
