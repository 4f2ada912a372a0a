use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::grid::{Grid, Symbol};

/// Parses the text form of a board puzzle into a `Grid`.
///
/// The first non-empty line holds the dimensions, `rows cols`. It is followed
/// by exactly `rows` non-empty lines, each with `cols` whitespace-separated
/// tokens. Only the first character of a token is significant; it must be a
/// symbol that `T` recognises.
///
/// # Returns
/// * `Ok(Grid)` when the text is well formed.
/// * `Err(PuzzleError::Parse)` naming the offending 1-based line when:
///     - the header is missing, not two numbers, or has a zero dimension,
///     - fewer than `rows` board lines follow the header,
///     - a board line does not have exactly `cols` tokens,
///     - a token starts with an unknown symbol.
///
/// Lines after the last board row are ignored.
///
/// # Examples
/// ```
/// use bfs_puzzles::grid::Coordinates;
/// use bfs_puzzles::puzzles::hoppers::Cell;
/// use bfs_puzzles::utils::parse_grid;
///
/// let grid = parse_grid::<Cell>("2 3\nG . R\n* * .\n").unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.get(Coordinates::new(0, 0)), Some(Cell::GreenFrog));
/// assert_eq!(grid.get(Coordinates::new(1, 2)), Some(Cell::LilyPad));
///
/// assert!(parse_grid::<Cell>("1 1\nX\n").is_err());
/// ```
pub fn parse_grid<T: Symbol>(text: &str) -> Result<Grid<T>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| PuzzleError::parse(1, "missing dimensions header"))?;
    let (rows, cols) = parse_dimensions(header_line, header)?;

    // Every cell takes at least one character of input.
    let mut cells = Vec::with_capacity((rows * cols).min(text.len()));
    let mut last_line = header_line;
    for r in 0..rows {
        let (line_nr, line) = lines.next().ok_or_else(|| {
            PuzzleError::parse(last_line + 1, format!("expected {} board rows, found {}", rows, r))
        })?;
        last_line = line_nr;

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != cols {
            return Err(PuzzleError::parse(
                line_nr,
                format!("expected {} cells, found {}", cols, tokens.len()),
            ));
        }
        for (c, token) in tokens.iter().enumerate() {
            // Tokens are non-empty after split_whitespace.
            let symbol = token.chars().next().unwrap_or(' ');
            let cell = T::from_symbol(symbol).ok_or_else(|| {
                PuzzleError::parse(line_nr, format!("unknown symbol '{}' in column {}", symbol, c))
            })?;
            cells.push(cell);
        }
    }

    Ok(Grid::from_cells(rows, cols, cells))
}

fn parse_dimensions(line_nr: usize, header: &str) -> Result<(usize, usize)> {
    let numbers: Vec<usize> = header
        .split_whitespace()
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| PuzzleError::parse(line_nr, format!("invalid dimensions '{}': {}", header, e)))?;
    match numbers[..] {
        [rows, cols] if rows > 0 && cols > 0 => match rows.checked_mul(cols) {
            Some(_) => Ok((rows, cols)),
            None => Err(PuzzleError::parse(line_nr, "board too large")),
        },
        [_, _] => Err(PuzzleError::parse(line_nr, "dimensions must be positive")),
        _ => Err(PuzzleError::parse(
            line_nr,
            format!("expected 'rows cols', found '{}'", header),
        )),
    }
}

/// Reads and parses a board puzzle file.
pub fn read_grid_file<T: Symbol>(path: &Path) -> Result<Grid<T>> {
    let content = fs::read_to_string(path)?;
    let grid = parse_grid(&content)?;
    debug!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "Loaded board");
    Ok(grid)
}
