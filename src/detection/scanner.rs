use crate::core::grid::Grid;
use crate::core::types::{Base, Orientation};

/// Number of identical consecutive bases that make a run
pub const RUN_LENGTH: usize = 4;

/// Check whether a single line holds [`RUN_LENGTH`] or more identical bases in a row.
///
/// Comparison ignores case. Bytes outside the `ACGT` alphabet break a run
/// and never start one.
///
/// # Examples
///
/// ```
/// use mutant_finder::detection::scanner::contains_run;
///
/// assert!(contains_run(b"TTGGGGA"));
/// assert!(contains_run(b"ccCc"));
/// assert!(!contains_run(b"AAATAAA"));
/// assert!(!contains_run(b"NNNN"));
/// ```
#[must_use]
pub fn contains_run(line: &[u8]) -> bool {
    let mut current: Option<Base> = None;
    let mut count = 0usize;

    for &b in line {
        let base = Base::from_byte(b);
        if base.is_some() && base == current {
            count += 1;
        } else {
            current = base;
            count = usize::from(base.is_some());
        }

        if count >= RUN_LENGTH {
            return true;
        }
    }

    false
}

/// True if ANY of the lines contains a run
#[must_use]
pub fn has_run<L: AsRef<[u8]>>(lines: &[L]) -> bool {
    lines.iter().any(|line| contains_run(line.as_ref()))
}

/// Columns of a square grid, each read top to bottom
#[must_use]
pub fn columns(cells: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let n = cells.len();
    (0..n)
        .map(|col| cells.iter().map(|row| row[col]).collect())
        .collect()
}

/// Down-right diagonals of a square grid that are long enough to hold a run.
///
/// A diagonal is the set of cells sharing `column - row`; its length is
/// `n - |column - row|`. Only the `2n - 7` diagonals of length at least
/// [`RUN_LENGTH`] are returned, each read top to bottom. Diagonals on or
/// below the main one come first, starting from the first column, then
/// those above it, starting from the first row.
#[must_use]
pub fn diagonals(cells: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let n = cells.len();
    if n < RUN_LENGTH {
        return Vec::new();
    }

    let below = (0..=n - RUN_LENGTH).rev().map(|start_row| (start_row, 0));
    let above = (1..=n - RUN_LENGTH).map(|start_col| (0, start_col));

    below
        .chain(above)
        .map(|(start_row, start_col)| {
            (start_row..n)
                .zip(start_col..n)
                .map(|(row, col)| cells[row][col])
                .collect()
        })
        .collect()
}

/// Search one orientation of the grid for a run
#[must_use]
pub fn scan(grid: &Grid, orientation: Orientation) -> bool {
    match orientation {
        Orientation::Horizontal => has_run(grid.forward()),
        Orientation::Vertical => has_run(&columns(grid.forward())),
        Orientation::DiagonalDownRight => has_run(&diagonals(grid.forward())),
        Orientation::DiagonalDownLeft => has_run(&diagonals(grid.mirrored())),
    }
}
