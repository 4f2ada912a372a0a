//! Rectangular boards shared by the chess and hoppers puzzles.
//!
//! A `Grid` carries its own dimensions, so every configuration built on top of
//! it is self-describing. Grids are values: changing a cell means producing a
//! new grid with [`Grid::with`].

use std::fmt;

/// A (row, column) position on a board. Row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub row: usize,
    pub col: usize,
}

impl Coordinates {
    pub fn new(row: usize, col: usize) -> Self {
        Coordinates { row, col }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A board of `rows` x `cols` cells stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Builds a grid from row-major `cells`.
    ///
    /// # Panics
    /// Panics if `cells.len() != rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Self {
        assert_eq!(cells.len(), rows * cols, "cell count does not match dimensions");
        Grid { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, at: Coordinates) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    /// Returns the cell at `at`, or `None` when it lies off the board.
    pub fn get(&self, at: Coordinates) -> Option<T> {
        if self.in_bounds(at) {
            Some(self.cells[at.row * self.cols + at.col])
        } else {
            None
        }
    }

    /// Returns a copy of this grid with each `(position, value)` written in order.
    ///
    /// # Panics
    /// Panics if a position is off the board.
    pub fn with(&self, changes: &[(Coordinates, T)]) -> Self {
        let mut next = self.clone();
        for &(at, value) in changes {
            assert!(next.in_bounds(at), "{} is off the board", at);
            next.cells[at.row * next.cols + at.col] = value;
        }
        next
    }

    /// Moves `times` steps of `(d_row, d_col)` from `from`, if the result stays on the board.
    pub fn offset(&self, from: Coordinates, (d_row, d_col): (isize, isize), times: isize) -> Option<Coordinates> {
        let row = from.row as isize + d_row * times;
        let col = from.col as isize + d_col * times;
        if row < 0 || col < 0 {
            return None;
        }
        let to = Coordinates::new(row as usize, col as usize);
        self.in_bounds(to).then_some(to)
    }

    /// Iterates over every position with its cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinates, T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coordinates::new(i / self.cols, i % self.cols), cell))
    }
}

/// Cell types that have a one-character text form.
pub trait Symbol: Copy {
    fn from_symbol(symbol: char) -> Option<Self>;
    fn to_symbol(self) -> char;
}

impl<T: Symbol> fmt::Display for Grid<T> {
    /// Rows of space-separated symbols, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[r * self.cols + c].to_symbol())?;
            }
        }
        Ok(())
    }
}

impl<T: Symbol> Grid<T> {
    /// Renders the board for the console front-end: a column header, a rule,
    /// then each row prefixed by its number.
    pub fn to_labelled_string(&self) -> String {
        let mut output = String::from("   ");
        for c in 0..self.cols {
            output.push_str(&format!("{} ", c));
        }
        output.push_str("\n  ");
        output.push_str(&"-".repeat((self.cols * 2).saturating_sub(1)));
        output.push('\n');
        for r in 0..self.rows {
            output.push_str(&format!("{}| ", r));
            for c in 0..self.cols {
                output.push(self.cells[r * self.cols + c].to_symbol());
                output.push(' ');
            }
            output.push('\n');
        }
        output
    }
}
