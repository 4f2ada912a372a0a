//! Chess solitaire: every move is a capture, and the goal is to leave a single
//! piece on the board.
//!
//! Pieces move as in chess, except that a move is only legal if it captures.
//! Pawns capture diagonally towards row 0. Sliding pieces travel over empty
//! squares and capture the first piece in their path.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::configuration::Configuration;
use crate::error::{PuzzleError, Result};
use crate::grid::{Coordinates, Grid, Symbol};
use crate::session::{Playable, Rejection};
use crate::utils::{parse_grid, read_grid_file};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    Bishop,
    King,
    Knight,
    Pawn,
    Queen,
    Rook,
}

/// A board square, empty or holding a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Square {
    Empty,
    Piece(Piece),
}

impl Symbol for Square {
    fn from_symbol(symbol: char) -> Option<Self> {
        let piece = match symbol {
            '.' => return Some(Square::Empty),
            'B' => Piece::Bishop,
            'K' => Piece::King,
            'N' => Piece::Knight,
            'P' => Piece::Pawn,
            'Q' => Piece::Queen,
            'R' => Piece::Rook,
            _ => return None,
        };
        Some(Square::Piece(piece))
    }

    fn to_symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Piece(Piece::Bishop) => 'B',
            Square::Piece(Piece::King) => 'K',
            Square::Piece(Piece::Knight) => 'N',
            Square::Piece(Piece::Pawn) => 'P',
            Square::Piece(Piece::Queen) => 'Q',
            Square::Piece(Piece::Rook) => 'R',
        }
    }
}

type Offset = (isize, isize);

/// How a piece reaches the squares it may capture.
enum Reach {
    /// One step of each offset.
    Step(&'static [Offset]),
    /// Any number of steps along each direction, stopping at the first piece.
    Slide(&'static [Offset]),
}

const PAWN_CAPTURES: [Offset; 2] = [(-1, -1), (-1, 1)];
const ORTHOGONAL: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ALL_DIRECTIONS: [Offset; 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
const KNIGHT_JUMPS: [Offset; 8] = [(-2, -1), (-2, 1), (2, -1), (2, 1), (-1, -2), (1, -2), (-1, 2), (1, 2)];

const PAWN_REACH: &[Reach] = &[Reach::Step(&PAWN_CAPTURES)];
const KING_REACH: &[Reach] = &[Reach::Step(&ALL_DIRECTIONS)];
const KNIGHT_REACH: &[Reach] = &[Reach::Step(&KNIGHT_JUMPS)];
const ROOK_REACH: &[Reach] = &[Reach::Slide(&ORTHOGONAL)];
const BISHOP_REACH: &[Reach] = &[Reach::Slide(&DIAGONAL)];
const QUEEN_REACH: &[Reach] = &[Reach::Slide(&ORTHOGONAL), Reach::Slide(&DIAGONAL)];

impl Piece {
    fn reach(self) -> &'static [Reach] {
        match self {
            Piece::Pawn => PAWN_REACH,
            Piece::King => KING_REACH,
            Piece::Knight => KNIGHT_REACH,
            Piece::Rook => ROOK_REACH,
            Piece::Bishop => BISHOP_REACH,
            Piece::Queen => QUEEN_REACH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChessConfig {
    board: Grid<Square>,
}

impl ChessConfig {
    pub fn from_grid(board: Grid<Square>) -> Self {
        ChessConfig { board }
    }

    /// Loads a board from a puzzle file (see [`crate::utils::parse_grid`]).
    pub fn load(path: &Path) -> Result<Self> {
        read_grid_file(path).map(ChessConfig::from_grid)
    }

    pub fn board(&self) -> &Grid<Square> {
        &self.board
    }

    pub fn piece_count(&self) -> usize {
        self.board
            .cells()
            .filter(|(_, square)| matches!(square, Square::Piece(_)))
            .count()
    }

    fn has_piece(&self, at: Coordinates) -> bool {
        matches!(self.board.get(at), Some(Square::Piece(_)))
    }

    /// Squares the piece at `from` can capture, in offset-table order.
    /// Empty if `from` holds no piece.
    pub fn captures_from(&self, from: Coordinates) -> Vec<Coordinates> {
        let Some(Square::Piece(piece)) = self.board.get(from) else {
            return Vec::new();
        };
        let mut targets = Vec::new();
        for reach in piece.reach() {
            match reach {
                Reach::Step(offsets) => targets.extend(
                    offsets
                        .iter()
                        .filter_map(|&offset| self.board.offset(from, offset, 1))
                        .filter(|&to| self.has_piece(to)),
                ),
                Reach::Slide(directions) => targets.extend(directions.iter().filter_map(|&direction| {
                    (1..)
                        .map_while(|distance| self.board.offset(from, direction, distance))
                        .find(|&to| self.has_piece(to))
                })),
            }
        }
        targets
    }

    /// The configuration after the piece at `from` captures the piece at `to`.
    fn capture(&self, from: Coordinates, to: Coordinates) -> Self {
        let mover = self.board.get(from).unwrap_or(Square::Empty);
        ChessConfig {
            board: self.board.with(&[(to, mover), (from, Square::Empty)]),
        }
    }
}

impl FromStr for ChessConfig {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        parse_grid(s).map(ChessConfig::from_grid)
    }
}

impl Configuration for ChessConfig {
    /// Solved once at most one piece is left.
    fn is_solution(&self) -> bool {
        self.piece_count() <= 1
    }

    fn neighbors(&self) -> Vec<Self> {
        self.board
            .cells()
            .filter(|(_, square)| matches!(square, Square::Piece(_)))
            .flat_map(|(from, _)| {
                self.captures_from(from)
                    .into_iter()
                    .map(move |to| self.capture(from, to))
            })
            .collect()
    }
}

impl fmt::Display for ChessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl Playable for ChessConfig {
    fn load(path: &Path) -> Result<Self> {
        ChessConfig::load(path)
    }

    fn render(&self) -> String {
        self.board.to_labelled_string()
    }

    fn check_selection(&self, at: Coordinates) -> std::result::Result<(), Rejection> {
        match self.board.get(at) {
            None => Err(Rejection::OutOfBounds(at)),
            Some(Square::Empty) => Err(Rejection::NothingToMove(at)),
            Some(Square::Piece(_)) => Ok(()),
        }
    }

    fn apply_move(&self, from: Coordinates, to: Coordinates) -> std::result::Result<Self, Rejection> {
        self.check_selection(from)?;
        if self.captures_from(from).contains(&to) {
            Ok(self.capture(from, to))
        } else {
            Err(Rejection::CannotMove { from, to })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{solve_bfs, Outcome};

    fn board(text: &str) -> ChessConfig {
        text.parse().unwrap()
    }

    fn at(row: usize, col: usize) -> Coordinates {
        Coordinates::new(row, col)
    }

    #[test]
    fn test_symbols_round_trip() {
        for symbol in ['.', 'B', 'K', 'N', 'P', 'Q', 'R'] {
            let square = Square::from_symbol(symbol).unwrap();
            assert_eq!(square.to_symbol(), symbol);
        }
        assert_eq!(Square::from_symbol('X'), None);
    }

    #[test]
    fn test_pawn_captures_upwards_only() {
        let config = board("3 3\nR . B\n. P .\nN . Q\n");
        assert_eq!(config.captures_from(at(1, 1)), vec![at(0, 0), at(0, 2)]);
    }

    #[test]
    fn test_king_single_steps() {
        let config = board("3 3\nP . .\n. K P\n. . N\n");
        assert_eq!(config.captures_from(at(1, 1)), vec![at(0, 0), at(1, 2), at(2, 2)]);
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let config = board("3 3\nP P R\nN P .\nB . .\n");
        // Only the (-1, +2) jump stays on the board and lands on a piece.
        assert_eq!(config.captures_from(at(1, 0)), vec![at(0, 2)]);
    }

    #[test]
    fn test_rook_slides_to_first_piece() {
        let config = board("1 5\nR . P . B\n");
        assert_eq!(config.captures_from(at(0, 0)), vec![at(0, 2)]);
    }

    #[test]
    fn test_bishop_and_queen_rays() {
        let config = board("4 4\n. . . P\n. . . .\n. B . .\nN . . .\n");
        assert_eq!(config.captures_from(at(2, 1)), vec![at(0, 3), at(3, 0)]);
        let config = board("4 4\nP . B P\n. . . .\nQ . . .\nN . . R\n");
        assert_eq!(config.captures_from(at(2, 0)), vec![at(0, 0), at(3, 0), at(0, 2)]);
    }

    #[test]
    fn test_no_captures_from_empty_square() {
        let config = board("1 2\n. R\n");
        assert!(config.captures_from(at(0, 0)).is_empty());
        assert!(config.captures_from(at(5, 5)).is_empty());
    }

    #[test]
    fn test_neighbors_and_solution() {
        let config = board("1 3\nR . N\n");
        assert!(!config.is_solution());
        let neighbors = config.neighbors();
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].to_string(), ". . R");
        assert!(neighbors[0].is_solution());
        // The parent is untouched.
        assert_eq!(config.to_string(), "R . N");
    }

    #[test]
    fn test_empty_and_single_piece_boards_are_solved() {
        assert!(board("2 2\n. .\n. .\n").is_solution());
        assert!(board("2 2\n. .\n. Q\n").is_solution());
    }

    #[test]
    fn test_solve_chain_of_captures() {
        let config = board("3 3\nN . .\n. . B\nR . P\n");
        let result = solve_bfs(&config);
        assert_eq!(result.outcome, Outcome::Solved);
        assert_eq!(result.moves(), Some(3));
        assert_eq!(result.path.first(), Some(&config));
        assert!(result.path.last().unwrap().is_solution());
        for pair in result.path.windows(2) {
            assert_eq!(pair[1].piece_count() + 1, pair[0].piece_count());
            assert!(pair[0].neighbors().contains(&pair[1]));
        }
    }

    #[test]
    fn test_unsolvable_board() {
        // Two pawns that can never reach each other.
        let config = board("2 3\nP . .\n. . P\n");
        let result = solve_bfs(&config);
        assert!(result.path.is_empty());
        assert_eq!(result.outcome, Outcome::Unsolvable);
    }

    #[test]
    fn test_apply_move() {
        let config = board("2 2\n. N\nP .\n");
        assert_eq!(
            config.apply_move(at(1, 0), at(0, 1)).unwrap().to_string(),
            ". P\n. ."
        );
        assert_eq!(config.apply_move(at(0, 0), at(0, 1)), Err(Rejection::NothingToMove(at(0, 0))));
        assert_eq!(
            config.apply_move(at(0, 1), at(1, 0)),
            Err(Rejection::CannotMove { from: at(0, 1), to: at(1, 0) })
        );
        assert_eq!(config.check_selection(at(2, 0)), Err(Rejection::OutOfBounds(at(2, 0))));
    }
}
