//! One side of the game.
use log::debug;
use rand::Rng;

use crate::{
    board::{AttackOutcome, Board, Dimensions},
    console::{Console, ConsoleError, PlacementInput},
    ships::{Orientation, Ship, ShipClass},
};

/// A player: their name, their board, and how many hits they have landed on the opponent.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
    hits: usize,
}

impl Player {
    /// Create a player with an empty board of the given [`Dimensions`].
    pub fn new(name: impl Into<String>, dim: Dimensions) -> Self {
        Self {
            name: name.into(),
            board: Board::new(dim),
            hits: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of shots this player has landed on a ship.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Returns true once every one of this player's ships is sunk.
    pub fn has_lost(&self) -> bool {
        self.board.all_ships_sunk()
    }

    /// Interactively place each ship of `fleet`, in order.
    pub fn place_ships<C, R>(
        &mut self,
        fleet: &[ShipClass],
        console: &mut C,
        rng: &mut R,
    ) -> Result<(), ConsoleError>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        for &class in fleet {
            self.place_ship(Ship::from(class), console, rng)?;
        }
        console.write_line(&self.board.render(true))?;
        Ok(())
    }

    /// Prompt until `ship` has been placed. There is no limit on retries.
    fn place_ship<C, R>(
        &mut self,
        mut ship: Ship,
        console: &mut C,
        rng: &mut R,
    ) -> Result<(), ConsoleError>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        console.write_line(&self.board.render(true))?;
        console.write_line(&format!(
            "{}, place your {} of size {}",
            self.name,
            ship.name(),
            ship.size()
        ))?;
        loop {
            let input = console.read_placement(
                "Enter start position and direction on one line (x y H for horizontal, x y V for vertical), or random:",
            )?;
            let placed = match input {
                PlacementInput::At { start, direction } => {
                    match direction.parse::<Orientation>() {
                        Ok(dir) => self.board.place_ship(ship, start, dir),
                        Err(err) => {
                            console.write_line(&format!("Invalid direction: {}.", err.0))?;
                            console.write_line("Use 'H' for horizontal or 'V' for vertical.")?;
                            continue;
                        }
                    }
                }
                PlacementInput::Random => self.board.place_randomly(ship, rng),
            };
            match placed {
                Ok(()) => return Ok(()),
                Err(err) => {
                    console.write_line(&format!("Invalid placement: {}.", err))?;
                    ship = err.into_ship();
                }
            }
        }
    }

    /// Take one shot at `opponent`. Prompts until the target is on the board. Returns true
    /// if the shot hit a ship. Shooting a cell twice is not a hit but still uses the turn.
    pub fn make_move<C>(
        &mut self,
        opponent: &mut Player,
        console: &mut C,
    ) -> Result<bool, ConsoleError>
    where
        C: Console + ?Sized,
    {
        console.write_line(&format!("{}'s waters:", opponent.name))?;
        console.write_line(&opponent.board.render(false))?;
        let last = opponent.board.dimensions().size() - 1;
        loop {
            let target = console.read_target(&format!(
                "{}, enter attack coordinates (x y):",
                self.name
            ))?;
            let outcome = match opponent.board.attack(target) {
                Ok(outcome) => outcome,
                Err(err) => {
                    console.write_line(&format!(
                        "Invalid target: {}. Coordinates run from 0 to {}.",
                        err, last
                    ))?;
                    continue;
                }
            };
            debug!(
                "{} shot {} at {}: {:?}",
                self.name, opponent.name, target, outcome
            );
            match outcome {
                AttackOutcome::Hit => {
                    self.hits += 1;
                    console.write_line("Hit!")?;
                    if let Some(ship) = opponent.board.sunk_ship_at(target) {
                        console.write_line(&format!(
                            "You sank {}'s {}!",
                            opponent.name,
                            ship.name()
                        ))?;
                    }
                }
                AttackOutcome::Miss => console.write_line("Miss!")?,
                AttackOutcome::AlreadyAttacked => {
                    console.write_line("This position has already been attacked!")?
                }
            }
            return Ok(outcome == AttackOutcome::Hit);
        }
    }
}
