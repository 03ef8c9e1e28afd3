//! Types that make up the game board.

use std::fmt;

use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::ships::{Orientation, Ship};

use self::grid::Grid;
pub use self::{
    dimensions::{Coordinate, Dimensions},
    errors::{CannotPlaceReason, PlaceError, ShotError},
};

mod dimensions;
mod errors;
mod grid;

/// State of a single cell in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// Nothing here and never shot.
    Empty,
    /// Occupied by a ship and not yet shot.
    ShipPresent,
    /// Occupied by a ship that has been shot here.
    Hit,
    /// Shot, and nothing was here.
    Miss,
}

/// Result of a shot on a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackOutcome {
    /// The shot struck a ship.
    Hit,
    /// The shot struck open water.
    Miss,
    /// The cell had already been shot. Nothing changed.
    AlreadyAttacked,
}

/// Represents a single player's board: their ships and their side of the ocean.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cell states.
    grid: Grid,
    /// Ships accepted by this board, in placement order.
    ships: Vec<Ship>,
}

impl Board {
    /// Construct an empty board with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// State of the cell at `coord`, or `None` if it is off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(coord).copied()
    }

    /// All ships placed on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Compute the cells `ship` would cover starting from `start` in direction `dir`,
    /// checking that every one of them is on the board and empty.
    fn project(
        &self,
        size: usize,
        start: Coordinate,
        dir: Orientation,
    ) -> Result<Vec<Coordinate>, CannotPlaceReason> {
        let mut cells = Vec::with_capacity(size);
        for offset in 0..size {
            let coord = dir
                .step(start, offset)
                .ok_or(CannotPlaceReason::OutOfBounds)?;
            match self.grid.get(coord) {
                None => return Err(CannotPlaceReason::OutOfBounds),
                Some(CellState::Empty) => cells.push(coord),
                Some(_) => return Err(CannotPlaceReason::AlreadyOccupied),
            }
        }
        Ok(cells)
    }

    /// Attempts to place `ship` with its first cell at `start`, extending in direction
    /// `dir`. On failure the board is untouched and the ship is returned inside the error.
    pub fn place_ship(
        &mut self,
        mut ship: Ship,
        start: Coordinate,
        dir: Orientation,
    ) -> Result<(), PlaceError> {
        let cells = match self.project(ship.size(), start, dir) {
            Ok(cells) => cells,
            Err(reason) => {
                debug!("rejected {} at {} {}: {}", ship.name(), start, dir, reason);
                return Err(PlaceError::new(reason, ship));
            }
        };
        // Every cell was checked by project, so indexing cannot fail.
        for coord in &cells {
            self.grid[coord] = CellState::ShipPresent;
        }
        debug!("placed {} at {} {}", ship.name(), start, dir);
        ship.set_position(cells);
        self.ships.push(ship);
        Ok(())
    }

    /// Place `ship` at a position chosen uniformly among every legal position on the
    /// board.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        ship: Ship,
        rng: &mut R,
    ) -> Result<(), PlaceError> {
        let candidates: Vec<(Coordinate, Orientation)> = self
            .dimensions()
            .iter_coordinates()
            .flatten()
            .flat_map(|start| Orientation::ALL.iter().map(move |&dir| (start, dir)))
            .filter(|&(start, dir)| self.project(ship.size(), start, dir).is_ok())
            .collect();
        match candidates.choose(rng) {
            Some(&(start, dir)) => self.place_ship(ship, start, dir),
            None => Err(PlaceError::new(CannotPlaceReason::NoSpace, ship)),
        }
    }

    /// Fire a shot at `coord`. Shots at cells that were already shot change nothing and
    /// report [`AttackOutcome::AlreadyAttacked`].
    pub fn attack(&mut self, coord: Coordinate) -> Result<AttackOutcome, ShotError> {
        let cell = self
            .grid
            .get_mut(coord)
            .ok_or(ShotError::OutOfBounds(coord))?;
        let outcome = match *cell {
            CellState::ShipPresent => {
                *cell = CellState::Hit;
                AttackOutcome::Hit
            }
            CellState::Empty => {
                *cell = CellState::Miss;
                AttackOutcome::Miss
            }
            CellState::Hit | CellState::Miss => AttackOutcome::AlreadyAttacked,
        };
        Ok(outcome)
    }

    /// Returns true if every cell of the given ship has been hit.
    fn is_sunk(&self, ship: &Ship) -> bool {
        ship.cells()
            .iter()
            .all(|coord| self.grid.get(coord) == Some(&CellState::Hit))
    }

    /// If the ship covering `coord` has been sunk, return it.
    pub fn sunk_ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.ships
            .iter()
            .find(|ship| ship.cells().contains(&coord))
            .filter(|ship| self.is_sunk(ship))
    }

    /// Returns true if all ships on this board have been sunk. A board with no ships
    /// counts as sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(|ship| self.is_sunk(ship))
    }

    /// Get a displayable view of this board. Ships that have not been hit are only shown
    /// if `reveal_ships` is set.
    pub fn view(&self, reveal_ships: bool) -> BoardView {
        BoardView {
            board: self,
            reveal_ships,
        }
    }

    /// Render this board as a row and column labelled grid.
    pub fn render(&self, reveal_ships: bool) -> String {
        self.view(reveal_ships).to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

/// Display helper for a [`Board`].
#[derive(Debug, Copy, Clone)]
pub struct BoardView<'a> {
    board: &'a Board,
    reveal_ships: bool,
}

impl BoardView<'_> {
    fn symbol(&self, cell: CellState) -> char {
        match cell {
            CellState::Hit => 'X',
            CellState::Miss => 'M',
            CellState::ShipPresent if self.reveal_ships => 'S',
            CellState::ShipPresent | CellState::Empty => '-',
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dim = self.board.dimensions();
        write!(f, "  ")?;
        for i in 0..dim.size() {
            write!(f, "{:>2}", i)?;
        }
        writeln!(f)?;
        for (i, row) in dim.iter_coordinates().enumerate() {
            write!(f, "{:>2}", i)?;
            for coord in row {
                write!(f, " {}", self.symbol(self.board.grid[coord]))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::ships::ShipClass;

    fn c(x: usize, y: usize) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn horizontal_destroyer_sinks_after_two_hits() {
        let mut board = Board::default();
        board
            .place_ship(Ship::from(ShipClass::Destroyer), c(0, 0), Orientation::Horizontal)
            .unwrap();
        assert_eq!(board.ships()[0].cells(), &[c(0, 0), c(0, 1)]);

        assert_eq!(board.attack(c(0, 0)).unwrap(), AttackOutcome::Hit);
        assert!(!board.all_ships_sunk());
        assert_eq!(board.attack(c(0, 1)).unwrap(), AttackOutcome::Hit);
        assert!(board.all_ships_sunk());
    }

    #[test]
    fn vertical_extends_along_rows() {
        let mut board = Board::default();
        board
            .place_ship(Ship::new("Cruiser", 3), c(4, 7), Orientation::Vertical)
            .unwrap();
        for x in 4..7 {
            assert_eq!(board.cell(c(x, 7)), Some(CellState::ShipPresent));
        }
        assert_eq!(board.cell(c(7, 7)), Some(CellState::Empty));
        assert_eq!(board.cell(c(4, 8)), Some(CellState::Empty));
    }

    #[test]
    fn carrier_cannot_run_off_the_bottom() {
        let mut board = Board::default();
        let before = board.clone().render(true);
        let err = board
            .place_ship(Ship::from(ShipClass::Carrier), c(8, 0), Orientation::Vertical)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert!(!err.ship().is_placed());
        assert_eq!(board.render(true), before);
        assert!(board.ships().is_empty());
    }

    #[test]
    fn overlapping_placement_leaves_board_alone() {
        let mut board = Board::default();
        board
            .place_ship(Ship::from(ShipClass::Battleship), c(2, 0), Orientation::Horizontal)
            .unwrap();
        let before = board.render(true);
        let err = board
            .place_ship(Ship::from(ShipClass::Cruiser), c(0, 2), Orientation::Vertical)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(err.into_ship().name(), "Cruiser");
        assert_eq!(board.render(true), before);
        assert_eq!(board.ships().len(), 1);
        assert_eq!(board.cell(c(0, 2)), Some(CellState::Empty));
        assert_eq!(board.cell(c(1, 2)), Some(CellState::Empty));
    }

    #[test]
    fn repeated_shots_change_nothing() {
        let mut board = Board::default();
        board
            .place_ship(Ship::from(ShipClass::Destroyer), c(5, 5), Orientation::Horizontal)
            .unwrap();
        assert_eq!(board.attack(c(0, 0)).unwrap(), AttackOutcome::Miss);
        assert_eq!(board.attack(c(0, 0)).unwrap(), AttackOutcome::AlreadyAttacked);
        assert_eq!(board.cell(c(0, 0)), Some(CellState::Miss));

        assert_eq!(board.attack(c(5, 6)).unwrap(), AttackOutcome::Hit);
        assert_eq!(board.attack(c(5, 6)).unwrap(), AttackOutcome::AlreadyAttacked);
        assert_eq!(board.cell(c(5, 6)), Some(CellState::Hit));
        assert!(!board.all_ships_sunk());
    }

    #[test]
    fn off_board_shot_is_rejected() {
        let mut board = Board::default();
        assert_eq!(
            board.attack(c(10, 3)).unwrap_err(),
            ShotError::OutOfBounds(c(10, 3))
        );
        assert_eq!(
            board.attack(c(3, usize::max_value())).unwrap_err(),
            ShotError::OutOfBounds(c(3, usize::max_value()))
        );
    }

    #[test]
    fn empty_fleet_is_sunk() {
        assert!(Board::default().all_ships_sunk());
    }

    #[test]
    fn reports_sunk_ship() {
        let mut board = Board::default();
        board
            .place_ship(Ship::from(ShipClass::Destroyer), c(3, 3), Orientation::Vertical)
            .unwrap();
        board.attack(c(3, 3)).unwrap();
        assert!(board.sunk_ship_at(c(3, 3)).is_none());
        board.attack(c(4, 3)).unwrap();
        assert_eq!(board.sunk_ship_at(c(3, 3)).map(Ship::name), Some("Destroyer"));
        assert!(board.sunk_ship_at(c(0, 0)).is_none());
    }

    #[test]
    fn render_hides_unhit_ships() {
        let mut board = Board::default();
        board
            .place_ship(Ship::from(ShipClass::Destroyer), c(0, 0), Orientation::Horizontal)
            .unwrap();
        board.attack(c(0, 0)).unwrap();
        board.attack(c(1, 1)).unwrap();

        let hidden = board.render(false);
        let lines: Vec<&str> = hidden.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "   0 1 2 3 4 5 6 7 8 9");
        assert_eq!(lines[1], " 0 X - - - - - - - - -");
        assert_eq!(lines[2], " 1 - M - - - - - - - -");

        let revealed = board.render(true);
        assert_eq!(revealed.lines().nth(1), Some(" 0 X S - - - - - - - -"));
    }

    #[test]
    fn random_placement_fills_fleet_without_overlap() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::default();
        for &class in ShipClass::FLEET {
            board.place_randomly(Ship::from(class), &mut rng).unwrap();
        }
        let occupied = board
            .dimensions()
            .iter_coordinates()
            .flatten()
            .filter(|&coord| board.cell(coord) == Some(CellState::ShipPresent))
            .count();
        assert_eq!(occupied, 17);
        assert_eq!(board.ships().len(), 5);
    }

    #[test]
    fn random_placement_reports_no_space() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(Dimensions::try_new(2).unwrap());
        let err = board
            .place_randomly(Ship::from(ShipClass::Cruiser), &mut rng)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::NoSpace);
    }
}
