//! Fixed parameters of a game.
use crate::{board::Dimensions, ships::ShipClass};

/// Parameters that stay constant for the whole game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rules {
    /// Dimensions of each player's board.
    dimensions: Dimensions,
    /// Number of shots each player may take before the game is decided on hits.
    max_attempts: usize,
}

impl Rules {
    /// The standard rules with a different cap on shots per player.
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Ships each player places, in order.
    pub fn fleet(&self) -> &'static [ShipClass] {
        ShipClass::FLEET
    }
}

impl Default for Rules {
    /// A 10x10 board and five shots per player.
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            max_attempts: 5,
        }
    }
}
