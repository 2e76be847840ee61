//! Fairhand interactive CLI
//!
//! Plays commit-reveal rounds of the generalized hand game against the
//! house. Move names come from the command line in cyclic order; each
//! round prints the house's HMAC digest before the player chooses and
//! the HMAC key after, so the round can be audited independently.

mod table;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use fairhand_core::{MoveSet, OsEntropy, Outcome, OutcomeMatrix, Round};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "fairhand")]
#[command(about = "Commit-reveal rock-paper-scissors with any odd number of moves")]
#[command(version)]
struct Cli {
    /// Move names in cyclic order: an odd number (>= 3) of distinct names
    #[arg(required = true)]
    moves: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting tracing subscriber");

    let move_set = match MoveSet::new(cli.moves) {
        Ok(set) => set,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Example: fairhand rock paper scissors");
            return ExitCode::FAILURE;
        }
    };

    match run(move_set) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(move_set: MoveSet) -> Result<(), Box<dyn std::error::Error>> {
    let mut entropy = OsEntropy;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let round = Round::open(move_set.clone(), &mut entropy)?;
        debug!(round_id = %round.id(), "opened round");
        println!("HMAC: {}", round.commitment());

        let choice = match read_choice(&move_set, &mut lines)? {
            Some(index) => index,
            None => return Ok(()),
        };

        let report = round.play(move_set.name(choice))?;
        debug!(round_id = %report.id, outcome = %report.outcome, "round resolved");

        println!("Your move: {}", report.player_move);
        println!("Computer move: {}", report.house_move);
        println!("{}", describe(report.outcome));
        println!("HMAC key: {}", report.secret);
        println!();
    }
}

/// Prompt until the player picks a move. Returns `None` on exit or EOF.
fn read_choice(
    move_set: &MoveSet,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<usize>> {
    print_menu(move_set);

    loop {
        print!("Enter your move: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };

        match line.trim() {
            "?" => print!("{}", table::render(&OutcomeMatrix::build(move_set))),
            "0" => {
                println!("Exiting the game.");
                return Ok(None);
            }
            input => match input.parse::<usize>() {
                Ok(n) if (1..=move_set.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => println!("Invalid input."),
            },
        }
    }
}

fn print_menu(move_set: &MoveSet) {
    println!("Available moves:");
    for (i, name) in move_set.names().iter().enumerate() {
        println!("{} - {}", i + 1, name);
    }
    println!("0 - exit");
    println!("? - help");
}

/// Round outcomes from the player's perspective
fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::FirstWins => "You win!",
        Outcome::SecondWins => "Computer wins!",
        Outcome::Draw => "Draw!",
    }
}
