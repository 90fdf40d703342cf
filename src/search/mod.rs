mod successors;
pub use successors::*;
mod minimax;
pub use minimax::*;
mod alphabeta;
pub use alphabeta::*;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::game::{Game, Player};

/// Records evaluator invocations.
pub trait Tally {
    fn visit(&mut self);
}

/// Uncounted searches.
impl Tally for () {
    fn visit(&mut self) {}
}

/// Number of nodes visited by a single top-level search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeCounter(u64);

impl NodeCounter {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Tally for NodeCounter {
    fn visit(&mut self) {
        self.0 += 1;
    }
}

/// Picks the best root successor for the player to move.
///
/// `evaluate` is called with each child and the player to move there.
/// The first move in generation order wins ties.
/// Terminal roots and roots without moves yield no move and their own utility.
fn decide<G, F>(
    game: &G,
    state: &G::State,
    ordering: &Ordering<G::Move>,
    mut evaluate: F,
) -> Result<(Option<G::Move>, G::Utility), Error>
where
    G: Game,
    F: FnMut(&G::State, Player) -> Result<G::Utility, Error>,
{
    if game.is_terminal(state) {
        return Ok((None, game.utility(state)));
    }

    let player = game.player(state);
    let mut best: Option<(G::Move, G::Utility)> = None;
    for (mv, child) in successors(game, state, player, ordering) {
        let value = evaluate(&child, player.other())?;
        let improves = match &best {
            Some((_, b)) => player.prefers(value, *b),
            None => true,
        };
        if improves {
            best = Some((mv, value));
        }
    }

    Ok(match best {
        Some((mv, value)) => (Some(mv), value),
        None => (None, game.utility(state)),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

/// Search configuration: the evaluator and its successor ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig<M> {
    pub algorithm: Algorithm,
    pub ordering: Ordering<M>,
}

impl<M> Default for SearchConfig<M> {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            ordering: Ordering::default(),
        }
    }
}

impl<M: Clone + PartialEq + fmt::Debug> SearchConfig<M> {
    pub fn new(algorithm: Algorithm, ordering: Ordering<M>) -> Self {
        Self {
            algorithm,
            ordering,
        }
    }

    /// Runs the configured search and returns move, value and visited nodes.
    pub fn decide<G>(
        &self,
        game: &G,
        state: &G::State,
    ) -> Result<(Option<M>, G::Utility, u64), Error>
    where
        G: Game<Move = M>,
    {
        match self.algorithm {
            Algorithm::Minimax => minimax_counted(game, state, &self.ordering),
            Algorithm::AlphaBeta => alphabeta_counted(game, state, &self.ordering),
        }
    }
}

impl<M: DeserializeOwned> FromStr for SearchConfig<M> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl<M: Serialize> fmt::Display for SearchConfig<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
