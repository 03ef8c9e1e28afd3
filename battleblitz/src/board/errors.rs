//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Ship};

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Some cell of the ship would fall outside the board.
    #[error("the ship does not fit on the board at that position")]
    OutOfBounds,
    /// Some cell of the ship would overlap a ship that was already placed.
    #[error("the requested position overlaps another ship")]
    AlreadyOccupied,
    /// There is no legal position left anywhere on the board for the ship.
    #[error("there is no room left on the board for the ship")]
    NoSpace,
}

/// Error caused when attempting to place a ship in an invalid position. Hands the ship
/// back so the caller can retry with another position.
#[derive(Error)]
#[error("could not place {}: {reason}", .ship.name())]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was rejected.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// The ship that was not placed.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the unplaced ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

/// Error returned when a shot cannot be fired at all.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ShotError {
    /// The target cell is off the board.
    #[error("{0} is outside the board")]
    OutOfBounds(Coordinate),
}
