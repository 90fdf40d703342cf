use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A non-terminal state below the root offered no moves.
    #[error("non-terminal state without legal moves at ply {ply}")]
    NoLegalMoves { ply: usize },

    #[error("invalid board: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCell { character: char, position: usize },

    #[error("invalid piece counts: X={x}, O={o} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x: usize, o: usize },

    /// Both sides completed a line, or play went on after a win.
    #[error("unreachable position: {reason}")]
    UnreachablePosition { reason: &'static str },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
