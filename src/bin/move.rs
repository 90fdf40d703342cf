use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use adversary::game::{Board, Game, TicTacToe};
use adversary::logging;
use adversary::search::SearchConfig;

#[derive(Debug, Parser)]
#[command(name = "adversary move", about = "Decide a single move for a board.")]
struct Opts {
    /// Search configuration as JSON,
    /// e.g. '{"algorithm":"Minimax","ordering":{"Priority":[4,0,2,6,8,1,3,5,7]}}'.
    #[arg(long, default_value_t)]
    config: SearchConfig<usize>,
    /// Board in row-major order, e.g. "XOX/.O./...".
    board: Board,
}

fn main() -> ExitCode {
    logging();

    let Opts { config, board } = Opts::parse();

    let game = TicTacToe::default();
    info!("{:?}", board);
    info!("{:?} to move, config {}", game.player(&board), config);

    match config.decide(&game, &board) {
        Ok((mv, value, nodes)) => {
            info!("Move: {:?} value={} nodes={}", mv, value, nodes);
            if let Some(mv) = mv {
                let next = game.apply(&board, &mv, game.player(&board));
                info!("{:?}", next);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
