use log::debug;

use super::{decide, successors, NodeCounter, Ordering, Tally};
use crate::error::Error;
use crate::game::{Comparable, Game, Player};

/// The values `Max` (alpha) and `Min` (beta) can already guarantee elsewhere.
///
/// Alpha only grows and beta only shrinks while moving down a branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<U> {
    pub alpha: U,
    pub beta: U,
}

impl<U: Comparable> Window<U> {
    /// (-infinity, +infinity)
    pub fn full() -> Self {
        Self {
            alpha: U::min(),
            beta: U::max(),
        }
    }

    /// Whether a node of `player` with the current `value` can stop searching.
    pub fn cutoff(&self, player: Player, value: U) -> bool {
        match player {
            Player::Max => value >= self.beta,
            Player::Min => value <= self.alpha,
        }
    }

    /// Tightens the bound of `player` with `value`.
    pub fn narrow(self, player: Player, value: U) -> Self {
        match player {
            Player::Max => Self {
                alpha: Player::Max.pick(self.alpha, value),
                ..self
            },
            Player::Min => Self {
                beta: Player::Min.pick(self.beta, value),
                ..self
            },
        }
    }
}

/// Alpha-Beta tree search.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - Always returns the same move and value as [`super::minimax`]
/// - Never visits more nodes than [`super::minimax`]
pub fn alphabeta<G: Game>(
    game: &G,
    state: &G::State,
    ordering: &Ordering<G::Move>,
) -> Result<(Option<G::Move>, G::Utility), Error> {
    let result = search(game, state, ordering, &mut ())?;
    debug!("alphabeta {:?}", result);
    Ok(result)
}

/// Same as [`alphabeta`], but also returns the number of visited nodes.
pub fn alphabeta_counted<G: Game>(
    game: &G,
    state: &G::State,
    ordering: &Ordering<G::Move>,
) -> Result<(Option<G::Move>, G::Utility, u64), Error> {
    let mut counter = NodeCounter::default();
    let (mv, value) = search(game, state, ordering, &mut counter)?;
    debug!("alphabeta {:?} {:?} nodes={}", mv, value, counter.get());
    Ok((mv, value, counter.get()))
}

/// The root narrows its own window after every child.
fn search<G: Game, T: Tally>(
    game: &G,
    state: &G::State,
    ordering: &Ordering<G::Move>,
    tally: &mut T,
) -> Result<(Option<G::Move>, G::Utility), Error> {
    let root = game.player(state);
    let mut window = Window::full();
    decide(game, state, ordering, |child, player| {
        let value = alphabeta_value(game, child, player, window, ordering, 1, tally)?;
        window = window.narrow(root, value);
        Ok(value)
    })
}

/// Value of `state` with `player` to move, searched within `window`.
///
/// Stops generating successors as soon as the window proves that the
/// remaining ones cannot influence the result.
pub fn alphabeta_value<G, T>(
    game: &G,
    state: &G::State,
    player: Player,
    mut window: Window<G::Utility>,
    ordering: &Ordering<G::Move>,
    ply: usize,
    tally: &mut T,
) -> Result<G::Utility, Error>
where
    G: Game,
    T: Tally + ?Sized,
{
    tally.visit();
    if game.is_terminal(state) {
        return Ok(game.utility(state));
    }

    let mut value = None;
    for (_, child) in successors(game, state, player, ordering) {
        let v = alphabeta_value(game, &child, player.other(), window, ordering, ply + 1, tally)?;
        let best = match value {
            Some(best) => player.pick(best, v),
            None => v,
        };
        value = Some(best);

        if window.cutoff(player, best) {
            break;
        }
        window = window.narrow(player, best);
    }
    value.ok_or(Error::NoLegalMoves { ply })
}
