//! The two-player game: fleet placement, alternating turns, and deciding the result.
//!
//! A [`Game`] starts in [`Phase::Setup`]. Once both fleets are placed, player one takes
//! the first turn and the players alternate. Every turn uses one of the active player's
//! attempts, whatever the shot hit. The game ends as soon as one fleet is sunk, or when
//! both players have used all of their attempts, in which case the player with more hits
//! wins and equal hits are a draw.
use std::{cmp::Ordering, fmt};

use log::info;
use rand::Rng;

use crate::{
    console::{Console, ConsoleError},
    rules::Rules,
};

pub use self::player::Player;

mod player;

/// Identifies one of the two seats at the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::P1 => 0,
            PlayerId::P2 => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            PlayerId::P1 => "player one",
            PlayerId::P2 => "player two",
        })
    }
}

/// How a finished game was decided.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The given player sank the whole opposing fleet.
    Victory(PlayerId),
    /// Both players ran out of attempts. Holds the player with strictly more hits, or
    /// `None` for a draw.
    ByScore(Option<PlayerId>),
}

impl Outcome {
    /// The winning player, or `None` for a draw.
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Victory(winner) => Some(winner),
            Outcome::ByScore(winner) => winner,
        }
    }
}

/// Where the game currently is.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Fleets are being placed.
    Setup,
    /// Waiting for the given player to shoot.
    Turn(PlayerId),
    /// The game is over.
    Finished(Outcome),
}

/// A game between two players sharing one console.
pub struct Game {
    rules: Rules,
    player_one: Player,
    player_two: Player,
    /// Turns taken, indexed by [`PlayerId`].
    attempts: [usize; 2],
    phase: Phase,
}

impl Game {
    /// Create a game with two empty boards.
    pub fn new(
        rules: Rules,
        player_one: impl Into<String>,
        player_two: impl Into<String>,
    ) -> Self {
        Self {
            rules,
            player_one: Player::new(player_one, rules.dimensions()),
            player_two: Player::new(player_two, rules.dimensions()),
            attempts: [0; 2],
            phase: Phase::Setup,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::P1 => &self.player_one,
            PlayerId::P2 => &self.player_two,
        }
    }

    /// Number of turns the given player has taken.
    pub fn attempts(&self, id: PlayerId) -> usize {
        self.attempts[id.index()]
    }

    /// Mutable access to the given player and their opponent at once.
    fn with_opponent(&mut self, id: PlayerId) -> (&mut Player, &mut Player) {
        match id {
            PlayerId::P1 => (&mut self.player_one, &mut self.player_two),
            PlayerId::P2 => (&mut self.player_two, &mut self.player_one),
        }
    }

    fn out_of_attempts(&self, id: PlayerId) -> bool {
        self.attempts(id) >= self.rules.max_attempts()
    }

    /// Compare hit counts once both players are out of attempts.
    fn score(&self) -> Outcome {
        let one = self.player_one.hits();
        let two = self.player_two.hits();
        Outcome::ByScore(match one.cmp(&two) {
            Ordering::Greater => Some(PlayerId::P1),
            Ordering::Less => Some(PlayerId::P2),
            Ordering::Equal => None,
        })
    }

    /// Have both players place their fleets, player one first. Does nothing outside of
    /// [`Phase::Setup`].
    pub fn place_fleets<C, R>(
        &mut self,
        console: &mut C,
        rng: &mut R,
    ) -> Result<Phase, ConsoleError>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        if self.phase != Phase::Setup {
            return Ok(self.phase);
        }
        let fleet = self.rules.fleet();
        for &id in &[PlayerId::P1, PlayerId::P2] {
            let (player, opponent) = self.with_opponent(id);
            console.write_line(&format!("{}, place your ships:", player.name()))?;
            player.place_ships(fleet, console, rng)?;
            info!("{} ({}) placed their fleet", player.name(), id);
            if id == PlayerId::P1 {
                console.write_line(&format!(
                    "{} is done. Pass the console to {}.",
                    player.name(),
                    opponent.name()
                ))?;
            }
        }
        let exhausted = self.out_of_attempts(PlayerId::P1) && self.out_of_attempts(PlayerId::P2);
        self.phase = if exhausted {
            Phase::Finished(self.score())
        } else {
            Phase::Turn(PlayerId::P1)
        };
        info!("setup complete, moving to {:?}", self.phase);
        Ok(self.phase)
    }

    /// Let the active player take one shot and advance the game. Does nothing unless it
    /// is someone's turn.
    pub fn play_turn<C>(&mut self, console: &mut C) -> Result<Phase, ConsoleError>
    where
        C: Console + ?Sized,
    {
        let active = match self.phase {
            Phase::Turn(active) => active,
            other => return Ok(other),
        };
        let (player, opponent) = self.with_opponent(active);
        console.write_line(&format!("{}'s turn:", player.name()))?;
        let hit = player.make_move(opponent, console)?;
        let sunk_fleet = hit && opponent.has_lost();
        self.attempts[active.index()] += 1;

        let next = active.opponent();
        self.phase = if sunk_fleet {
            Phase::Finished(Outcome::Victory(active))
        } else if self.out_of_attempts(active) && self.out_of_attempts(next) {
            Phase::Finished(self.score())
        } else {
            Phase::Turn(next)
        };
        if let Phase::Finished(outcome) = self.phase {
            info!(
                "game finished after {} and {} attempts: {:?}",
                self.attempts[0], self.attempts[1], outcome
            );
        }
        Ok(self.phase)
    }

    /// Play a complete game: placement, turns until the game is decided, and the final
    /// report.
    pub fn run<C, R>(&mut self, console: &mut C, rng: &mut R) -> Result<Outcome, ConsoleError>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        console.write_line("Welcome to Battleship Blitz!")?;
        let mut phase = self.place_fleets(console, rng)?;
        let outcome = loop {
            match phase {
                Phase::Finished(outcome) => break outcome,
                _ => phase = self.play_turn(console)?,
            }
        };
        self.report(outcome, console)?;
        Ok(outcome)
    }

    /// Print hit counts and the result.
    pub fn report<C>(&self, outcome: Outcome, console: &mut C) -> Result<(), ConsoleError>
    where
        C: Console + ?Sized,
    {
        console.write_line("Game Over!")?;
        for player in &[&self.player_one, &self.player_two] {
            console.write_line(&format!("{} hits: {}", player.name(), player.hits()))?;
        }
        let line = match outcome {
            Outcome::Victory(winner) => format!(
                "{} wins by sinking the entire fleet!",
                self.player(winner).name()
            ),
            Outcome::ByScore(Some(winner)) => format!(
                "{} wins by hitting more ships!",
                self.player(winner).name()
            ),
            Outcome::ByScore(None) => "It's a draw!".to_owned(),
        };
        console.write_line(&line)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::console::TerminalConsole;

    /// Places every ship of the fleet on its own row, starting at column 0.
    const ROWS: &str = "0 0 H\n1 0 H\n2 0 H\n3 0 H\n4 0 H\n";

    fn console(input: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn phases_advance_in_order() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = Game::new(Rules::with_max_attempts(1), "Ann", "Ben");
        assert_eq!(game.phase(), Phase::Setup);
        assert_eq!(game.play_turn(&mut console("")).unwrap(), Phase::Setup);

        let mut con = console(&format!("{}{}9 9\n0 0\n", ROWS, ROWS));
        assert_eq!(
            game.place_fleets(&mut con, &mut rng).unwrap(),
            Phase::Turn(PlayerId::P1)
        );
        assert_eq!(game.play_turn(&mut con).unwrap(), Phase::Turn(PlayerId::P2));
        assert_eq!(
            game.play_turn(&mut con).unwrap(),
            Phase::Finished(Outcome::ByScore(Some(PlayerId::P2)))
        );
        assert_eq!(game.attempts(PlayerId::P1), 1);
        assert_eq!(game.attempts(PlayerId::P2), 1);
        assert_eq!(game.player(PlayerId::P2).hits(), 1);

        // Finished games ignore further turns.
        assert_eq!(
            game.play_turn(&mut con).unwrap(),
            Phase::Finished(Outcome::ByScore(Some(PlayerId::P2)))
        );
    }

    #[test]
    fn zero_attempts_is_an_immediate_draw() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = Game::new(Rules::with_max_attempts(0), "Ann", "Ben");
        let mut con = console(&format!("{}{}", ROWS, ROWS));
        assert_eq!(game.run(&mut con, &mut rng).unwrap(), Outcome::ByScore(None));
    }

    #[test]
    fn closed_input_abandons_the_game() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = Game::new(Rules::default(), "Ann", "Ben");
        let mut con = console(ROWS);
        match game.run(&mut con, &mut rng) {
            Err(ConsoleError::Closed) => {}
            other => panic!("expected closed console, got {:?}", other),
        }
        assert_eq!(game.phase(), Phase::Setup);
    }

    #[test]
    fn outcome_winner() {
        assert_eq!(Outcome::Victory(PlayerId::P2).winner(), Some(PlayerId::P2));
        assert_eq!(Outcome::ByScore(Some(PlayerId::P1)).winner(), Some(PlayerId::P1));
        assert_eq!(Outcome::ByScore(None).winner(), None);
        assert_eq!(PlayerId::P1.opponent(), PlayerId::P2);
    }
}
