use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use chess_referee::{
    ChessErrors, FixedPromotion, Game, GameState, Position, PromotionChoice, PromotionSelector,
};

/// Terminal front end for the chess referee.
///
/// Enter moves as four integers `x y nx ny` (file and rank of the source, then
/// of the destination, each 0-7). Other commands: `board`, `reset`, `quit`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Promote to this piece (n, b, r or q) instead of asking
    #[arg(long, value_parser = parse_promotion)]
    promote: Option<PromotionChoice>,
}

fn parse_promotion(s: &str) -> Result<PromotionChoice, ChessErrors> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PromotionChoice::try_from(c),
        _ => Err(ChessErrors::InvalidPromotionChar(s.chars().next().unwrap_or(' '))),
    }
}

/// Asks on the terminal until a valid promotion piece is entered.
struct StdinPromotion;

impl PromotionSelector for StdinPromotion {
    fn choose_promotion(&mut self) -> PromotionChoice {
        println!("Enter a piece (n, b, r, q) to promote to:");
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.lock().read_line(&mut line) {
                // Input closed: a queen is the only sensible answer.
                Ok(0) | Err(_) => return PromotionChoice::Queen,
                Ok(_) => {}
            }
            match line.trim().chars().next().map(PromotionChoice::try_from) {
                Some(Ok(choice)) => return choice,
                _ => println!("Please enter a piece."),
            }
        }
    }
}

fn parse_move(line: &str) -> Result<(Position, Position), ChessErrors> {
    let invalid = || ChessErrors::InvalidMoveInput(line.to_string());
    let coords = line
        .split_ascii_whitespace()
        .map(|token| token.parse::<i32>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;
    match coords.as_slice() {
        &[x, y, nx, ny] => Ok((Position::try_new(x, y)?, Position::try_new(nx, ny)?)),
        _ => Err(invalid()),
    }
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut game = match args.promote {
        Some(choice) => Game::with_selector(FixedPromotion(choice)),
        None => Game::with_selector(StdinPromotion),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    println!("{game}");
    loop {
        print!("{:?} to move> ", game.current_player());
        stdout.flush().context("flushing prompt")?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("reading a move from stdin")?;
        if read == 0 {
            return Ok(());
        }

        match line.trim() {
            "" => continue,
            "quit" => return Ok(()),
            "board" => println!("{game}"),
            "reset" => {
                game.reset();
                println!("{game}");
            }
            input => match parse_move(input) {
                Ok((from, to)) => {
                    if let Err(reason) = game.try_move(from, to) {
                        println!("Illegal move: {reason}.");
                        continue;
                    }
                    println!("{game}");
                    match game.state() {
                        GameState::Ongoing if game.is_in_check() => println!("Check."),
                        GameState::Ongoing => {}
                        GameState::WhiteWin => println!("Checkmate. White wins."),
                        GameState::BlackWin => println!("Checkmate. Black wins."),
                        GameState::Draw => println!("Stalemate. Draw."),
                    }
                }
                Err(e) => println!("{e}"),
            },
        }
    }
}
