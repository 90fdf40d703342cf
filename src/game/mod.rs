mod tictactoe;
pub use tictactoe::*;

use std::fmt::Debug;

/// The two sides of a zero-sum game.
/// Utilities are always seen from the perspective of `Max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Max,
    Min,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// Returns true if `value` is strictly better than `best` for this player.
    pub fn prefers<U: PartialOrd>(self, value: U, best: U) -> bool {
        match self {
            Player::Max => value > best,
            Player::Min => value < best,
        }
    }

    /// Folds `value` into `best`, keeping `best` on ties.
    pub fn pick<U: PartialOrd>(self, best: U, value: U) -> U {
        if self.prefers(&value, &best) {
            value
        } else {
            best
        }
    }
}

/// The outcome of a game position.
/// If the game did not end the outcome is `None`.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Outcome {
    None,
    Draw,
    Winner(Player),
}

/// The result type of a terminal position.
pub trait Comparable: Copy + PartialOrd + Debug {
    /// Upper bound of the domain, used as +infinity for search windows.
    fn max() -> Self;
    /// Lower bound of the domain, used as -infinity for search windows.
    fn min() -> Self;
}

impl Comparable for i32 {
    fn max() -> i32 {
        i32::MAX
    }
    fn min() -> i32 {
        i32::MIN
    }
}

impl Comparable for f64 {
    fn max() -> f64 {
        f64::INFINITY
    }
    fn min() -> f64 {
        -f64::INFINITY
    }
}

/// Rules of a finite two-player zero-sum game with perfect information.
///
/// The search never mutates a state: every successor is a new value created
/// by [`Game::apply`].
///
/// Implementations must not expect [`Game::utility`] to be called for
/// non-terminal states and must return no moves for terminal states.
pub trait Game {
    type State: Debug;
    type Move: Clone + PartialEq + Debug;
    type Utility: Comparable;

    /// The player to move in `state`.
    fn player(&self, state: &Self::State) -> Player;

    /// Whether the game has ended in `state`.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Payoff of a terminal state from the perspective of [`Player::Max`].
    fn utility(&self, state: &Self::State) -> Self::Utility;

    /// All moves available to `player`, in natural order.
    fn legal_moves(&self, state: &Self::State, player: Player) -> Vec<Self::Move>;

    /// The state reached when `player` plays `mv` in `state`.
    fn apply(&self, state: &Self::State, mv: &Self::Move, player: Player) -> Self::State;
}
