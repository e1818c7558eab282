//! Interactive two-player session on the terminal

use std::io::{self, BufRead, Write};

use chess_rules_core::game::{parse_command, Command};
use chess_rules_core::{Error, GameState};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let game = match std::env::args().nth(1) {
        Some(fen) => match GameState::from_fen(&fen) {
            Ok(game) => game,
            Err(e) => {
                eprintln!("{}", e);
                eprintln!("Usage: play [\"<fen>\"]");
                std::process::exit(1);
            }
        },
        None => GameState::new(),
    };

    if let Err(e) = run(game, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(mut game: GameState, input: impl BufRead, mut out: impl Write) -> Result<(), Error> {
    let mut lines = input.lines();

    loop {
        write!(out, "{}", game.board())?;
        writeln!(
            out,
            "Enter move for {} (e.g., 'e2 to e4') or 'exit' to quit: ",
            game.side_to_move().display_name()
        )?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };

        match parse_command(&line?) {
            Ok(Command::Exit) => return Ok(()),
            Ok(Command::Move(mv)) => {
                if game.play(mv).is_err() {
                    writeln!(out, "Invalid move.")?;
                }
            }
            Err(_) => writeln!(out, "Invalid move format. Please use 'e2 to e4' format.")?,
        }
    }
}
