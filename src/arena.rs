//! Playing complete games between strategies.

use std::fmt::Debug;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Error;
use crate::game::{Game, Player};
use crate::search::SearchConfig;

/// Chooses a move for the player to move.
pub trait Strategy<G: Game> {
    /// Returns `None` if there is nothing to play.
    fn choose(&mut self, game: &G, state: &G::State) -> Result<Option<G::Move>, Error>;
}

impl<G, M> Strategy<G> for SearchConfig<M>
where
    G: Game<Move = M>,
    M: Clone + PartialEq + Debug,
{
    fn choose(&mut self, game: &G, state: &G::State) -> Result<Option<G::Move>, Error> {
        let (mv, value, nodes) = self.decide(game, state)?;
        trace!("{:?} -> {:?} value={:?} nodes={}", self.algorithm, mv, value, nodes);
        Ok(mv)
    }
}

/// Plays uniformly random legal moves.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<G: Game, R: Rng> Strategy<G> for RandomStrategy<R> {
    fn choose(&mut self, game: &G, state: &G::State) -> Result<Option<G::Move>, Error> {
        if game.is_terminal(state) {
            return Ok(None);
        }
        let moves = game.legal_moves(state, game.player(state));
        Ok(moves.choose(&mut self.rng).cloned())
    }
}

/// Plays a game from `state` until it ends or a strategy passes.
///
/// `max` plays for [`Player::Max`], `min` for [`Player::Min`].
/// Returns the final state and the number of moves played.
pub fn play<'a, G>(
    game: &G,
    mut state: G::State,
    max: &'a mut dyn Strategy<G>,
    min: &'a mut dyn Strategy<G>,
) -> Result<(G::State, usize), Error>
where
    G: Game,
{
    let mut plies = 0;
    while !game.is_terminal(&state) {
        let player = game.player(&state);
        let strategy = match player {
            Player::Max => &mut *max,
            Player::Min => &mut *min,
        };
        match strategy.choose(game, &state)? {
            Some(mv) => {
                debug!("{:?} plays {:?}", player, mv);
                state = game.apply(&state, &mv, player);
                plies += 1;
            }
            None => break,
        }
    }
    Ok((state, plies))
}
