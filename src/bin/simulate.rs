use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::{error, info};
use owo_colors::OwoColorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use adversary::arena::{play, RandomStrategy, Strategy};
use adversary::game::{Board, Outcome, Player, TicTacToe};
use adversary::logging;
use adversary::search::SearchConfig;
use adversary::Error;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Opponent {
    /// The engine with the same configuration.
    Engine,
    /// Uniformly random legal moves.
    Random,
}

#[derive(Debug, Parser)]
#[command(
    name = "adversary simulate",
    about = "Play games between the engine (X) and an opponent (O)."
)]
struct Opts {
    /// Search configuration as JSON.
    #[arg(long, default_value_t)]
    config: SearchConfig<usize>,
    #[arg(long, value_enum, default_value = "random")]
    opponent: Opponent,
    #[arg(short, long, default_value = "10")]
    game_count: usize,
    /// Seed for the random opponent.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Default)]
struct Results {
    wins: usize,
    draws: usize,
    losses: usize,
}

fn main() -> ExitCode {
    logging();

    let opts = Opts::parse();
    match run(opts) {
        Ok(results) => {
            info!(
                "Result: {} wins, {} draws, {} losses",
                results.wins, results.draws, results.losses
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(opts: Opts) -> Result<Results, Error> {
    let Opts {
        config,
        opponent,
        game_count,
        seed,
        verbose,
    } = opts;

    let game = TicTacToe::default();
    let rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let mut engine = config.clone();
    let mut opponent: Box<dyn Strategy<TicTacToe>> = match opponent {
        Opponent::Engine => Box::new(config),
        Opponent::Random => Box::new(RandomStrategy::new(rng)),
    };

    let start = Instant::now();
    let mut results = Results::default();
    for i in 0..game_count {
        let (board, plies) = play(&game, Board::new(), &mut engine, opponent.as_mut())?;
        if verbose {
            info!("{:?}", board);
        }
        match game.outcome(&board) {
            Outcome::Winner(Player::Max) => results.wins += 1,
            Outcome::Winner(Player::Min) => results.losses += 1,
            _ => results.draws += 1,
        }
        info!(
            "{}: {} {:?} after {} plies {}ms",
            "Finish Game".bright_green(),
            i,
            game.outcome(&board),
            plies,
            start.elapsed().as_millis()
        );
    }
    Ok(results)
}
