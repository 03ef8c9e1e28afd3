//! Coordinates and the square dimensions they index into.
use std::fmt;

/// The coordinates of a single cell on the board. `x` selects the row and `y` selects the
/// column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Row of the cell.
    pub x: usize,
    /// Column of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Dimensions of a square board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Number of rows and of columns.
    size: usize,
}

impl Dimensions {
    /// Create [`Dimensions`] for a `size` by `size` board. Returns `None` if `size` is 0 or
    /// `size * size` exceeds `usize::max_value()`.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 {
            None
        } else {
            size.checked_mul(size).map(|_| Self { size })
        }
    }

    /// Number of rows (and columns) in these [`Dimensions`].
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.x * self.size + coord.y)
        } else {
            None
        }
    }

    /// Get an iterator over rows of the grid. Each row is an iterator over the coordinates
    /// of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |x| (0..size).map(move |y| Coordinate { x, y }))
    }
}

impl Default for Dimensions {
    /// The standard 10x10 board.
    fn default() -> Self {
        Self { size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_is_row_major() {
        let dim = Dimensions::default();
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 0)), Some(0));
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 9)), Some(9));
        assert_eq!(dim.try_linearize(&Coordinate::new(1, 0)), Some(10));
        assert_eq!(dim.try_linearize(&Coordinate::new(9, 9)), Some(99));
        assert_eq!(dim.try_linearize(&Coordinate::new(10, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 10)), None);
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(Dimensions::try_new(0).is_none());
        assert!(Dimensions::try_new(usize::max_value()).is_none());
        assert_eq!(Dimensions::try_new(10), Some(Dimensions::default()));
    }

    #[test]
    fn rows_cover_every_cell_once() {
        let dim = Dimensions::default();
        let cells: Vec<Coordinate> = dim.iter_coordinates().flatten().collect();
        assert_eq!(cells.len(), 100);
        assert_eq!(cells[0], Coordinate::new(0, 0));
        assert_eq!(cells[11], Coordinate::new(1, 1));
    }
}
