use serde::{Deserialize, Serialize};

use crate::game::{Game, Player};

/// The order in which successors are generated.
///
/// The order never changes a search result's value, but it decides which
/// move wins a tie and how much alpha-beta can prune.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ordering<M> {
    /// The order of [`Game::legal_moves`].
    Natural,
    /// Legal moves from this list first, the remaining ones in natural order.
    Priority(Vec<M>),
}

impl<M> Default for Ordering<M> {
    fn default() -> Self {
        Ordering::Natural
    }
}

impl<M: Clone + PartialEq> Ordering<M> {
    pub fn arrange(&self, legal: Vec<M>) -> Vec<M> {
        match self {
            Ordering::Natural => legal,
            Ordering::Priority(preferred) => {
                let mut moves = Vec::with_capacity(legal.len());
                for m in preferred {
                    if legal.contains(m) && !moves.contains(m) {
                        moves.push(m.clone());
                    }
                }
                for m in legal {
                    if !moves.contains(&m) {
                        moves.push(m);
                    }
                }
                moves
            }
        }
    }
}

/// Lazily creates the `(move, state)` pairs of a position.
///
/// States are only built when the iterator is advanced, so a consumer that
/// stops early never pays for the remaining children.
pub struct Successors<'a, G: Game> {
    game: &'a G,
    state: &'a G::State,
    player: Player,
    moves: std::vec::IntoIter<G::Move>,
}

impl<'a, G: Game> Iterator for Successors<'a, G> {
    type Item = (G::Move, G::State);

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.moves.next()?;
        let child = self.game.apply(self.state, &mv, self.player);
        Some((mv, child))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.moves.size_hint()
    }
}

/// Successors of `state` when `player` is to move, ordered by `ordering`.
pub fn successors<'a, G: Game>(
    game: &'a G,
    state: &'a G::State,
    player: Player,
    ordering: &Ordering<G::Move>,
) -> Successors<'a, G> {
    let moves = ordering.arrange(game.legal_moves(state, player));
    Successors {
        game,
        state,
        player,
        moves: moves.into_iter(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::{Board, Cell, TicTacToe};

    #[test]
    fn natural_order() {
        let game = TicTacToe::default();
        let board = Board::parse("XOX/.O./...").unwrap();
        let moves: Vec<_> = successors(&game, &board, Player::Max, &Ordering::Natural)
            .map(|(m, _)| m)
            .collect();
        assert_eq!(moves, vec![3, 5, 6, 7, 8]);
    }

    #[test]
    fn priority_order() {
        let game = TicTacToe::default();
        let board = Board::parse("X../.../...").unwrap();
        let children: Vec<_> =
            successors(&game, &board, Player::Min, &TicTacToe::preferred()).collect();
        let moves: Vec<_> = children.iter().map(|(m, _)| *m).collect();
        assert_eq!(moves, vec![4, 2, 6, 8, 1, 3, 5, 7]);
        for (m, child) in &children {
            assert_eq!(child.cells()[*m], Cell::O);
            assert_eq!(child.count(Cell::Empty), 7);
        }
    }

    #[test]
    fn partial_priority() {
        let ordering = Ordering::Priority(vec![7, 3, 7, 9]);
        assert_eq!(ordering.arrange(vec![1, 3, 5, 7]), vec![7, 3, 1, 5]);
        assert_eq!(ordering.arrange(Vec::new()), Vec::<i32>::new());
    }

    #[test]
    fn lazy_generation() {
        let game = TicTacToe::default();
        let board = Board::new();
        let mut iter = successors(&game, &board, Player::Max, &Ordering::Natural);
        assert_eq!(iter.size_hint(), (9, Some(9)));
        iter.next();
        assert_eq!(iter.size_hint(), (8, Some(8)));
    }

    #[test]
    fn ordering_json() {
        let ordering: Ordering<usize> = serde_json::from_str(r#"{"Priority":[4,0]}"#).unwrap();
        assert_eq!(ordering, Ordering::Priority(vec![4, 0]));
        let natural: Ordering<usize> = serde_json::from_str(r#""Natural""#).unwrap();
        assert_eq!(natural, Ordering::Natural);
    }
}
