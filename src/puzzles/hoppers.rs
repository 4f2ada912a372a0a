//! Hoppers: frogs on a pond of lily pads jump over green frogs, removing them.
//!
//! The pond is laid out so that diagonal neighbours are one step apart while
//! horizontal and vertical neighbours are two steps apart and only exist on
//! cells whose row and column are both even. The puzzle is solved when no
//! green frog is left.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::configuration::Configuration;
use crate::error::{PuzzleError, Result};
use crate::grid::{Coordinates, Grid, Symbol};
use crate::session::{Playable, Rejection};
use crate::utils::{parse_grid, read_grid_file};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Water,
    LilyPad,
    GreenFrog,
    RedFrog,
}

impl Cell {
    pub fn is_frog(self) -> bool {
        matches!(self, Cell::GreenFrog | Cell::RedFrog)
    }
}

impl Symbol for Cell {
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '*' => Some(Cell::Water),
            '.' => Some(Cell::LilyPad),
            'G' => Some(Cell::GreenFrog),
            'R' => Some(Cell::RedFrog),
            _ => None,
        }
    }

    fn to_symbol(self) -> char {
        match self {
            Cell::Water => '*',
            Cell::LilyPad => '.',
            Cell::GreenFrog => 'G',
            Cell::RedFrog => 'R',
        }
    }
}

type Offset = (isize, isize);

/// Offsets to the jumped-over frog; the landing pad is twice as far.
const DIAGONAL_HOPS: [Offset; 4] = [(-1, 1), (1, -1), (-1, -1), (1, 1)];
const STRAIGHT_HOPS: [Offset; 4] = [(2, 0), (0, 2), (-2, 0), (0, -2)];

/// A single legal jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jump {
    pub from: Coordinates,
    pub over: Coordinates,
    pub to: Coordinates,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HoppersConfig {
    board: Grid<Cell>,
}

impl HoppersConfig {
    pub fn from_grid(board: Grid<Cell>) -> Self {
        HoppersConfig { board }
    }

    /// Loads a pond from a puzzle file (see [`crate::utils::parse_grid`]).
    pub fn load(path: &Path) -> Result<Self> {
        read_grid_file(path).map(HoppersConfig::from_grid)
    }

    pub fn board(&self) -> &Grid<Cell> {
        &self.board
    }

    pub fn green_frogs(&self) -> usize {
        self.board
            .cells()
            .filter(|&(_, cell)| cell == Cell::GreenFrog)
            .count()
    }

    /// Every jump the frog at `from` can make. Empty if there is no frog there.
    pub fn jumps_from(&self, from: Coordinates) -> Vec<Jump> {
        if !self.board.get(from).is_some_and(Cell::is_frog) {
            return Vec::new();
        }
        let straight: &[Offset] = if from.row % 2 == 0 && from.col % 2 == 0 {
            &STRAIGHT_HOPS
        } else {
            &[]
        };
        DIAGONAL_HOPS
            .iter()
            .chain(straight)
            .filter_map(|&hop| {
                let over = self.board.offset(from, hop, 1)?;
                let to = self.board.offset(from, hop, 2)?;
                let legal = self.board.get(over) == Some(Cell::GreenFrog)
                    && self.board.get(to) == Some(Cell::LilyPad);
                legal.then_some(Jump { from, over, to })
            })
            .collect()
    }

    fn jump(&self, jump: &Jump) -> Self {
        let frog = self.board.get(jump.from).unwrap_or(Cell::LilyPad);
        HoppersConfig {
            board: self.board.with(&[
                (jump.over, Cell::LilyPad),
                (jump.from, Cell::LilyPad),
                (jump.to, frog),
            ]),
        }
    }
}

impl FromStr for HoppersConfig {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        parse_grid(s).map(HoppersConfig::from_grid)
    }
}

impl Configuration for HoppersConfig {
    fn is_solution(&self) -> bool {
        self.green_frogs() == 0
    }

    fn neighbors(&self) -> Vec<Self> {
        self.board
            .cells()
            .flat_map(|(from, _)| self.jumps_from(from))
            .map(|jump| self.jump(&jump))
            .collect()
    }
}

impl fmt::Display for HoppersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl Playable for HoppersConfig {
    fn load(path: &Path) -> Result<Self> {
        HoppersConfig::load(path)
    }

    fn render(&self) -> String {
        self.board.to_labelled_string()
    }

    fn check_selection(&self, at: Coordinates) -> std::result::Result<(), Rejection> {
        match self.board.get(at) {
            None => Err(Rejection::OutOfBounds(at)),
            Some(Cell::Water) => Err(Rejection::Unselectable(at)),
            Some(cell) if cell.is_frog() => Ok(()),
            Some(_) => Err(Rejection::NothingToMove(at)),
        }
    }

    fn apply_move(&self, from: Coordinates, to: Coordinates) -> std::result::Result<Self, Rejection> {
        self.check_selection(from)?;
        self.jumps_from(from)
            .iter()
            .find(|jump| jump.to == to)
            .map(|jump| self.jump(jump))
            .ok_or(Rejection::CannotMove { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{solve_bfs, Outcome};

    fn pond(text: &str) -> HoppersConfig {
        text.parse().unwrap()
    }

    fn at(row: usize, col: usize) -> Coordinates {
        Coordinates::new(row, col)
    }

    const THREE_BY_THREE: &str = "3 3\nR * .\n* G *\n. * .\n";

    #[test]
    fn test_diagonal_jump_over_green() {
        let config = pond(THREE_BY_THREE);
        let jumps = config.jumps_from(at(0, 0));
        assert_eq!(jumps, vec![Jump { from: at(0, 0), over: at(1, 1), to: at(2, 2) }]);
    }

    #[test]
    fn test_cannot_jump_over_red_or_onto_frog() {
        let config = pond("3 3\nG * .\n* R *\n. * .\n");
        assert!(config.jumps_from(at(0, 0)).is_empty());
        let config = pond("3 3\nR * .\n* G *\n. * G\n");
        assert!(config.jumps_from(at(0, 0)).is_empty());
    }

    #[test]
    fn test_straight_jumps_only_from_even_cells() {
        // Row 0: frog at col 0 jumps over col 2 to col 4.
        let config = pond("1 5\nR . G . .\n");
        assert_eq!(config.jumps_from(at(0, 0)), vec![Jump { from: at(0, 0), over: at(0, 2), to: at(0, 4) }]);
        // Same shape starting on an odd column is not a legal straight jump.
        let config = pond("1 6\n. R . G . .\n");
        assert!(config.jumps_from(at(0, 1)).is_empty());
        // Vertical jump.
        let config = pond("5 1\nG\n.\nG\n.\n.\n");
        assert_eq!(config.jumps_from(at(0, 0)), vec![Jump { from: at(0, 0), over: at(2, 0), to: at(4, 0) }]);
    }

    #[test]
    fn test_no_jumps_from_water_or_pad() {
        let config = pond(THREE_BY_THREE);
        assert!(config.jumps_from(at(0, 1)).is_empty());
        assert!(config.jumps_from(at(2, 0)).is_empty());
        assert!(config.jumps_from(at(9, 9)).is_empty());
    }

    #[test]
    fn test_neighbors_remove_jumped_frog() {
        let config = pond(THREE_BY_THREE);
        let neighbors = config.neighbors();
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].to_string(), ". * .\n* . *\n. * R");
        assert!(neighbors[0].is_solution());
        assert_eq!(config.green_frogs(), 1);
    }

    #[test]
    fn test_solve_three_jumps() {
        let config = pond("5 5\nG * G * .\n* G * . *\n. * . * .\n* . * . *\n. * . * R\n");
        // Each jump removes exactly one green frog, so three greens need three jumps.
        let result = solve_bfs(&config);
        assert_eq!(result.outcome, Outcome::Solved);
        assert!(result.path.last().unwrap().is_solution());
        for pair in result.path.windows(2) {
            assert!(pair[0].neighbors().contains(&pair[1]));
            assert_eq!(pair[1].green_frogs() + 1, pair[0].green_frogs());
        }
        assert_eq!(result.moves(), Some(3));
    }

    #[test]
    fn test_unsolvable_pond() {
        let config = pond("1 3\nG . .\n");
        let result = solve_bfs(&config);
        assert!(result.path.is_empty());
        assert_eq!(result.outcome, Outcome::Unsolvable);
    }

    #[test]
    fn test_apply_move_validates() {
        let config = pond(THREE_BY_THREE);
        let moved = config.apply_move(at(0, 0), at(2, 2)).unwrap();
        assert!(moved.is_solution());
        assert_eq!(config.apply_move(at(0, 1), at(2, 2)), Err(Rejection::Unselectable(at(0, 1))));
        assert_eq!(config.apply_move(at(2, 0), at(0, 2)), Err(Rejection::NothingToMove(at(2, 0))));
        assert_eq!(
            config.apply_move(at(0, 0), at(2, 0)),
            Err(Rejection::CannotMove { from: at(0, 0), to: at(2, 0) })
        );
    }
}
