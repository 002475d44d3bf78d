/// Sample a deck of Set cards, find all its sets with both solvers and
/// compare the results.
///
/// CLI Usage:
///   cargo run                              # prompts for the number of cards
///   cargo run -- --cards 12                # 12 random cards of the 81
///   cargo run -- -c 60 --domain 4 --seed 7
///   cargo run -- -c 81 --json

use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use set_solver::report::Report;
use set_solver::utils::*;
use set_solver::{Deck, Domain, SetError, SetResult};

/// CLI arguments structure
#[derive(Parser, Debug)]
#[command(name = "set_solver")]
#[command(about = "Find all the sets in a random deck of Set cards", long_about = None)]
struct Args {
    /// Number of cards in the deck (prompted for when absent)
    #[arg(short, long)]
    cards: Option<usize>,

    /// Number of values per attribute (3 for the standard game)
    #[arg(short, long, default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(3..=9))]
    domain: u8,

    /// Seed for the deck sampling (random when absent)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Copy the output to a timestamped log file
    #[arg(long)]
    log: bool,

    /// Print solver internals
    #[arg(long)]
    debug: bool,
}

/// Ask for the number of cards: the prompt goes to `prompt` (stderr in the
/// driver, so that stdout stays clean for --json), the answer is read from
/// `input`
fn prompt_cards<R: BufRead, W: Write>(max: usize, input: &mut R, prompt: &mut W) -> SetResult<usize> {
    write!(prompt, "input the number of cards that you'd like in a deck (max of {}): ", max)
        .and_then(|_| prompt.flush())
        .map_err(|e| SetError::InvalidInput(format!("cannot write prompt: {}", e)))?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| SetError::InvalidInput(format!("cannot read stdin: {}", e)))?;
    line.trim()
        .parse::<usize>()
        .map_err(|e| SetError::InvalidInput(format!("{:?} is not a number: {}", line.trim(), e)))
}

/// Returns whether both solvers found the same sets
fn run(args: &Args) -> SetResult<bool> {
    let domain = Domain::new(args.domain)?;
    let n = match args.cards {
        Some(n) => n,
        None => prompt_cards(domain.universe_size(), &mut io::stdin().lock(), &mut io::stderr())?,
    };

    let deck = match args.seed {
        Some(seed) => Deck::sample(domain, n, &mut SmallRng::seed_from_u64(seed))?,
        None => Deck::sample(domain, n, &mut rand::rng())?,
    };
    debug_print(&format!("deck: {}", deck.codes().join(" ")));

    let report = Report::run(&deck);
    if args.json {
        let json = report
            .to_json()
            .map_err(|e| SetError::InvalidInput(format!("cannot render report: {}", e)))?;
        println!("{}", json);
    } else {
        for line in report.to_lines() {
            test_print(&line);
        }
    }
    Ok(report.is_consistent())
}

fn main() {
    let args = Args::parse();

    if args.debug {
        debug_print_on();
    } else {
        debug_print_off();
    }
    if args.json {
        test_print_off();
    } else {
        test_print_on();
    }
    if args.log {
        match init_log_file() {
            Ok(filename) => eprintln!("Log file created: {}", filename),
            Err(e) => eprintln!("Warning: Could not create log file: {}", e),
        }
    }
    banner("Set Solver - brute force vs pair completion");

    match run(&args) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("error: the two solvers disagree");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
