use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use adversary::game::{Board, TicTacToe};
use adversary::logging;
use adversary::search::{alphabeta_counted, minimax_counted, Ordering};
use adversary::Error;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Ascending cell index.
    Natural,
    /// Center, corners, edges.
    Priority,
}

impl Policy {
    fn ordering(self) -> Ordering<usize> {
        match self {
            Policy::Natural => Ordering::Natural,
            Policy::Priority => TicTacToe::preferred(),
        }
    }
}

/// Compare minimax and alpha-beta on tic-tac-toe positions.
#[derive(Debug, Parser)]
#[command(name = "adversary compare")]
struct Opts {
    /// Successor ordering used by both searches.
    #[arg(long, value_enum, default_value = "priority")]
    ordering: Policy,
    /// Board to analyze, e.g. "XOX/.O./...".
    /// Defaults to the empty board and a mid-game position.
    #[arg(long)]
    board: Option<Board>,
}

fn main() -> ExitCode {
    logging();

    let Opts { ordering, board } = Opts::parse();

    match run(board, &ordering.ordering()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(board: Option<Board>, ordering: &Ordering<usize>) -> Result<(), Error> {
    let boards = match board {
        Some(board) => vec![board],
        None => vec![Board::new(), Board::parse("XOX/.O./...")?],
    };
    for board in &boards {
        compare(board, ordering)?;
    }
    Ok(())
}

fn compare(board: &Board, ordering: &Ordering<usize>) -> Result<(), Error> {
    let game = TicTacToe::default();
    info!("{:?}", board);
    info!("ordering {:?}", ordering);

    let (m_mv, m_value, m_nodes) = minimax_counted(&game, board, ordering)?;
    let (a_mv, a_value, a_nodes) = alphabeta_counted(&game, board, ordering)?;
    info!("minimax:   move={:?} value={} nodes={}", m_mv, m_value, m_nodes);
    info!("alphabeta: move={:?} value={} nodes={}", a_mv, a_value, a_nodes);
    if m_nodes > 0 {
        info!(
            "alphabeta visited {:.1}% of the minimax nodes",
            100.0 * a_nodes as f64 / m_nodes as f64
        );
    }
    Ok(())
}
