//! Battleship Blitz: two players hide a fleet of five ships on 10x10 boards, then take
//! turns shooting at each other's board. A player wins by sinking the whole opposing
//! fleet. If neither fleet is sunk when both players have used their attempts, the
//! player with more hits wins, and equal hits are a draw.
//!
//! All interaction goes through the [`Console`][console::Console] trait, so complete
//! games can be played against scripted input.

pub mod board;
pub mod console;
pub mod game;
pub mod rules;
pub mod ships;

pub use crate::{
    board::{AttackOutcome, Board, CellState, Coordinate, Dimensions},
    console::{Console, ConsoleError, PlacementInput, TerminalConsole},
    game::{Game, Outcome, Phase, Player, PlayerId},
    rules::Rules,
    ships::{Orientation, Ship, ShipClass},
};
