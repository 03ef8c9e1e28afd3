use std::io;

use clap::{value_t, App, Arg, ArgMatches};
use log::info;

use battleblitz::{ConsoleError, Game, Rules, TerminalConsole};

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let matches = App::new("Battleship Blitz")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Two-player command line battleship with a limited number of shots.")
        .arg(
            Arg::with_name("attempts")
                .short("a")
                .long("attempts")
                .value_name("N")
                .help("number of shots each player may take")
                .takes_value(true)
                .default_value("5")
                .validator(|value| match value.parse::<usize>() {
                    Ok(n) if n > 0 => Ok(()),
                    _ => Err(format!("expected a positive number, got {}", value)),
                }),
        )
        .arg(
            Arg::with_name("player_one")
                .long("player-one")
                .value_name("NAME")
                .help("name of the player who places and shoots first")
                .takes_value(true)
                .default_value("Player 1"),
        )
        .arg(
            Arg::with_name("player_two")
                .long("player-two")
                .value_name("NAME")
                .help("name of the second player")
                .takes_value(true)
                .default_value("Player 2"),
        )
        .get_matches();

    let rules = choose_rules(&matches);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = TerminalConsole::new(stdin.lock(), stdout.lock());
    let mut rng = rand::thread_rng();

    let mut game = Game::new(
        rules,
        matches.value_of("player_one").unwrap_or("Player 1"),
        matches.value_of("player_two").unwrap_or("Player 2"),
    );
    match game.run(&mut console, &mut rng) {
        Ok(outcome) => {
            info!("game over: {:?}", outcome);
            Ok(())
        }
        Err(ConsoleError::Closed) => {
            info!("input closed before the game finished");
            Ok(())
        }
        Err(ConsoleError::Io(err)) => Err(err),
    }
}

/// Build the [`Rules`] from the command line.
fn choose_rules(matches: &ArgMatches) -> Rules {
    let attempts = value_t!(matches, "attempts", usize).unwrap_or_else(|err| err.exit());
    Rules::with_max_attempts(attempts)
}
