mod console;

use std::io::{stdin, stdout};

use anyhow::Result;
use clap::Parser;

use console::{Console, GameOptions};
use trove_game::{GameMode, ParseModeError};

fn parse_mode(s: &str) -> Result<GameMode, ParseModeError> {
    s.parse()
}

#[derive(Debug, Parser)]
#[command(name = "trove", version)]
#[command(about = "Town-hopping treasure hunt: gear up, brawl for gold, find all three treasures")]
struct Args {
    /// Hunter name (prompted when omitted)
    #[arg(long)]
    name: Option<String>,

    /// Difficulty code: e, n, h or s (prompted when omitted)
    #[arg(long, value_parser = parse_mode)]
    mode: Option<GameMode>,

    /// Seed for a reproducible run (drawn from entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Start pre-equipped with a full kit and extra gold
    #[arg(long)]
    test_kit: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdin = stdin();
    let mut console = Console::new(stdin.lock(), stdout());
    console.run(GameOptions {
        name: args.name,
        mode: args.mode,
        seed: args.seed.unwrap_or_else(rand::random::<u64>),
        test_kit: args.test_kit,
    })?;
    Ok(())
}
