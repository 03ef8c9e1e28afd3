//! Types used for defining ships and the directions they can be laid out in.
use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::board::Coordinate;

/// The classes of ship in the standard fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipClass {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Cruiser: length 3.
    Cruiser,
    /// Submarine: length 3.
    Submarine,
    /// Destroyer: length 2.
    Destroyer,
}

impl ShipClass {
    /// Every player's fleet, in the order the ships are placed.
    pub const FLEET: &'static [ShipClass] = &[
        ShipClass::Carrier,
        ShipClass::Battleship,
        ShipClass::Cruiser,
        ShipClass::Submarine,
        ShipClass::Destroyer,
    ];

    /// Display name of this class.
    pub fn name(self) -> &'static str {
        match self {
            ShipClass::Carrier => "Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Submarine => "Submarine",
            ShipClass::Destroyer => "Destroyer",
        }
    }

    /// Get the length of this ship class.
    pub fn len(self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Submarine => 3,
            ShipClass::Destroyer => 2,
        }
    }
}

/// A named ship of a given size, plus the cells it occupies once placed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    name: String,
    size: usize,
    /// Empty until the ship is placed.
    cells: Vec<Coordinate>,
}

impl Ship {
    /// Construct an unplaced ship. Panics if `size` is 0.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        assert!(size > 0);
        Self {
            name: name.into(),
            size,
            cells: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The cells this ship occupies, in placement order. Empty before placement.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Record the final cells of this ship. Does no validation; that is the job of the
    /// [`Board`][crate::board::Board] accepting the ship.
    pub fn set_position(&mut self, cells: Vec<Coordinate>) {
        self.cells = cells;
    }
}

impl From<ShipClass> for Ship {
    fn from(class: ShipClass) -> Self {
        Ship::new(class.name(), class.len())
    }
}

/// Placement direction of a ship.
///
/// `Horizontal` extends along the column index (`y`) and `Vertical` extends along the row
/// index (`x`), so a horizontal ship sits on a single printed row.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    pub const ALL: &'static [Orientation] = &[Orientation::Horizontal, Orientation::Vertical];

    /// The coordinate `offset` steps from `start` in this direction. Returns `None` on
    /// arithmetic overflow.
    pub fn step(self, start: Coordinate, offset: usize) -> Option<Coordinate> {
        match self {
            Orientation::Horizontal => start
                .y
                .checked_add(offset)
                .map(|y| Coordinate::new(start.x, y)),
            Orientation::Vertical => start
                .x
                .checked_add(offset)
                .map(|x| Coordinate::new(x, start.y)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Orientation::Horizontal => "H",
            Orientation::Vertical => "V",
        })
    }
}

/// Error for direction text that is neither horizontal nor vertical.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid direction {0:?}, use 'H' for horizontal or 'V' for vertical")]
pub struct InvalidDirection(pub String);

impl FromStr for Orientation {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Orientation::Horizontal),
            "v" | "vertical" => Ok(Orientation::Vertical),
            _ => Err(InvalidDirection(s.to_owned())),
        }
    }
}
