use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use owo_colors::OwoColorize;

use super::{Game, Outcome, Player};
use crate::error::Error;
use crate::search::Ordering;

pub const WIN: i32 = 1;
pub const DRAW: i32 = 0;
pub const LOSS: i32 = -1;

/// Cell indices of a 3x3 board:
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
pub const CELLS: usize = 9;

/// Rows, columns and diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Center, then corners, then edges.
pub const PREFERRED: [usize; CELLS] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl From<Player> for Cell {
    fn from(p: Player) -> Cell {
        match p {
            Player::Max => Cell::X,
            Player::Min => Cell::O,
        }
    }
}

impl Cell {
    fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::Max),
            Cell::O => Some(Player::Min),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// Immutable tic-tac-toe position. X always moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    pub fn from_cells(cells: [Cell; CELLS]) -> Board {
        Board { cells }
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Returns a copy with `cell` placed at `i`.
    pub fn with(mut self, i: usize, cell: Cell) -> Board {
        self.cells[i] = cell;
        self
    }

    /// Whether `cell` occupies one of the default [`LINES`].
    fn has_line(&self, cell: Cell) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == cell))
    }

    /// X moves whenever both sides have placed the same number of marks.
    pub fn to_move(&self) -> Player {
        if self.count(Cell::X) == self.count(Cell::O) {
            Player::Max
        } else {
            Player::Min
        }
    }

    /// Parses the nine cells in row-major order.
    ///
    /// `X` and `O` are marks, `_`, `.` and `-` are empty cells.
    /// Whitespace, `/` and `|` separate rows and are ignored.
    pub fn parse(txt: &str) -> Result<Board, Error> {
        let mut cells = [Cell::Empty; CELLS];
        let mut n = 0;
        for c in txt.chars() {
            let cell = match c {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '_' | '.' | '-' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                character => {
                    return Err(Error::InvalidCell {
                        character,
                        position: n,
                    })
                }
            };
            if n < CELLS {
                cells[n] = cell;
            }
            n += 1;
        }
        if n != CELLS {
            return Err(Error::InvalidBoardLength {
                expected: CELLS,
                got: n,
            });
        }

        let board = Board { cells };
        let (x, o) = (board.count(Cell::X), board.count(Cell::O));
        if x != o && x != o + 1 {
            return Err(Error::InvalidPieceCounts { x, o });
        }
        // the winner made the last move
        match (board.has_line(Cell::X), board.has_line(Cell::O)) {
            (true, true) => Err(Error::UnreachablePosition {
                reason: "both sides have a line",
            }),
            (true, false) if x != o + 1 => Err(Error::UnreachablePosition {
                reason: "O moved after X won",
            }),
            (false, true) if x != o => Err(Error::UnreachablePosition {
                reason: "X moved after O won",
            }),
            _ => Ok(board),
        }
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

/// Compact `XOX/.O./...` form, accepted by [`Board::parse`].
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(3).enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.chunks(3) {
            write!(f, " ")?;
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, " {}", '.'.bright_black())?,
                    Cell::X => write!(f, " {}", 'X'.green())?,
                    Cell::O => write!(f, " {}", 'O'.yellow())?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// Tic-tac-toe rules on a 3x3 board.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    lines: Vec<[usize; 3]>,
}

impl Default for TicTacToe {
    fn default() -> Self {
        TicTacToe::new(LINES.to_vec())
    }
}

impl TicTacToe {
    /// Rules with a custom set of winning lines.
    pub fn new(lines: Vec<[usize; 3]>) -> TicTacToe {
        TicTacToe { lines }
    }

    /// Center first, then corners, then edges.
    pub fn preferred() -> Ordering<usize> {
        Ordering::Priority(PREFERRED.to_vec())
    }

    pub fn winner(&self, board: &Board) -> Option<Player> {
        self.lines.iter().find_map(|&[a, b, c]| {
            let cell = board.cells[a];
            if cell != Cell::Empty && cell == board.cells[b] && cell == board.cells[c] {
                cell.player()
            } else {
                None
            }
        })
    }

    pub fn outcome(&self, board: &Board) -> Outcome {
        match self.winner(board) {
            Some(player) => Outcome::Winner(player),
            None if board.is_full() => Outcome::Draw,
            None => Outcome::None,
        }
    }
}

impl Game for TicTacToe {
    type State = Board;
    type Move = usize;
    type Utility = i32;

    fn player(&self, board: &Board) -> Player {
        board.to_move()
    }

    fn is_terminal(&self, board: &Board) -> bool {
        self.outcome(board) != Outcome::None
    }

    fn utility(&self, board: &Board) -> i32 {
        match self.winner(board) {
            Some(Player::Max) => WIN,
            Some(Player::Min) => LOSS,
            None => DRAW,
        }
    }

    fn legal_moves(&self, board: &Board, _player: Player) -> Vec<usize> {
        if self.is_terminal(board) {
            return Vec::new();
        }
        (0..CELLS)
            .filter(|&i| board.cells[i] == Cell::Empty)
            .collect()
    }

    fn apply(&self, board: &Board, &i: &usize, player: Player) -> Board {
        board.with(i, Cell::from(player))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_board() {
        let board = Board::parse("X O X / _ O _ / _ _ _").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[4], Cell::O);
        assert_eq!(board.count(Cell::Empty), 5);
        assert_eq!(board.to_move(), Player::Max);
        assert_eq!(format!("{}", board), "XOX/.O./...");
        assert_eq!(Board::parse(&board.to_string()).unwrap(), board);

        let multiline = Board::parse(
            r#"
            x . .
            . o .
            . . x"#,
        )
        .unwrap();
        assert_eq!(multiline.to_move(), Player::Min);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Board::parse("XO"),
            Err(Error::InvalidBoardLength {
                expected: 9,
                got: 2
            })
        ));
        assert!(matches!(
            Board::parse("XOX/.Z./..."),
            Err(Error::InvalidCell {
                character: 'Z',
                position: 4
            })
        ));
        assert!(matches!(
            Board::parse("XXX/.../..."),
            Err(Error::InvalidPieceCounts { x: 3, o: 0 })
        ));
        assert!(Board::parse("XOX/OXO/XOX/X").is_err());
    }

    #[test]
    fn unreachable_positions() {
        for txt in ["XXX/OOO/...", "XXX/OO./O..", "OOO/XX./XX."] {
            assert!(
                matches!(Board::parse(txt), Err(Error::UnreachablePosition { .. })),
                "{}",
                txt
            );
        }
        // X completes two lines with its last mark
        assert!(Board::parse("XXX/OOX/OOX").is_ok());
        assert!(Board::parse("XX./OOO/X..").is_ok());
    }

    #[test]
    fn terminal_utilities() {
        let game = TicTacToe::default();

        let x_wins = Board::parse("XXX/OO./...").unwrap();
        assert!(game.is_terminal(&x_wins));
        assert_eq!(game.utility(&x_wins), WIN);
        assert_eq!(game.outcome(&x_wins), Outcome::Winner(Player::Max));

        let o_wins = Board::parse("XX./OOO/X..").unwrap();
        assert!(game.is_terminal(&o_wins));
        assert_eq!(game.utility(&o_wins), LOSS);

        let diagonal = Board::parse("O.X/.XO/X..").unwrap();
        assert_eq!(game.utility(&diagonal), WIN);

        let full = Board::parse("XOX/XOO/OXX").unwrap();
        assert!(game.is_terminal(&full));
        assert_eq!(game.outcome(&full), Outcome::Draw);
        assert_eq!(game.utility(&full), DRAW);

        let open = Board::new();
        assert!(!game.is_terminal(&open));
        assert_eq!(game.outcome(&open), Outcome::None);
    }

    #[test]
    fn moves() {
        let game = TicTacToe::default();
        let board = Board::parse("XOX/.O./...").unwrap();
        assert_eq!(game.legal_moves(&board, Player::Max), vec![3, 5, 6, 7, 8]);

        let next = game.apply(&board, &7, Player::Max);
        assert_eq!(next.cells()[7], Cell::X);
        // the parent is left untouched
        assert_eq!(board.cells()[7], Cell::Empty);
        assert_eq!(next.to_move(), Player::Min);

        let won = Board::parse("XXX/OO./...").unwrap();
        assert!(game.legal_moves(&won, Player::Min).is_empty());
    }

    #[test]
    fn custom_lines() {
        // only the first row wins
        let game = TicTacToe::new(vec![[0, 1, 2]]);
        let board = Board::parse("X.O/X.O/X..").unwrap();
        assert_eq!(game.winner(&board), None);
        assert_eq!(game.winner(&Board::parse("XXX/OO./...").unwrap()), Some(Player::Max));
    }
}
