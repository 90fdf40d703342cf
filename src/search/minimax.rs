use log::debug;

use super::{decide, successors, NodeCounter, Ordering, Tally};
use crate::error::Error;
use crate::game::{Game, Player};

/// Minimax tree search without pruning.
///
/// @see https://en.wikipedia.org/wiki/Minimax
/// - Searches every reachable state down to the terminal ones
/// - Returns the best move for the player to move and its value
pub fn minimax<G: Game>(
    game: &G,
    state: &G::State,
    ordering: &Ordering<G::Move>,
) -> Result<(Option<G::Move>, G::Utility), Error> {
    let result = search(game, state, ordering, &mut ())?;
    debug!("minimax {:?}", result);
    Ok(result)
}

/// Same as [`minimax`], but also returns the number of visited nodes.
pub fn minimax_counted<G: Game>(
    game: &G,
    state: &G::State,
    ordering: &Ordering<G::Move>,
) -> Result<(Option<G::Move>, G::Utility, u64), Error> {
    let mut counter = NodeCounter::default();
    let (mv, value) = search(game, state, ordering, &mut counter)?;
    debug!("minimax {:?} {:?} nodes={}", mv, value, counter.get());
    Ok((mv, value, counter.get()))
}

fn search<G: Game, T: Tally>(
    game: &G,
    state: &G::State,
    ordering: &Ordering<G::Move>,
    tally: &mut T,
) -> Result<(Option<G::Move>, G::Utility), Error> {
    decide(game, state, ordering, |child, player| {
        minimax_value(game, child, player, ordering, 1, tally)
    })
}

/// Value of `state` with `player` to move.
/// `Player::Max` takes the maximum over its successors, `Player::Min` the minimum.
pub fn minimax_value<G, T>(
    game: &G,
    state: &G::State,
    player: Player,
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
        let v = minimax_value(game, &child, player.other(), ordering, ply + 1, tally)?;
        value = Some(match value {
            Some(best) => player.pick(best, v),
            None => v,
        });
    }
    value.ok_or(Error::NoLegalMoves { ply })
}
