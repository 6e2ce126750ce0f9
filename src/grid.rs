use tracing::debug;

use crate::error::{GridProblem, Result};

/// Largest accepted row count and row width.
pub const MAX_DIM: usize = 64;

/// Immutable rectangular character grid.
///
/// Cells are kept row-major in one contiguous buffer; `cols` is the row stride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridIndex {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl GridIndex {
    /// Builds a grid from rows listed top to bottom.
    ///
    /// Fails when there are no rows, when either dimension exceeds
    /// [`MAX_DIM`], or when a row's character count differs from the first
    /// row's. A grid whose rows are all empty counts as an empty grid.
    pub fn new<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // one row past the limit is enough to reject
        let lines: Vec<Vec<char>> = rows
            .into_iter()
            .take(MAX_DIM + 1)
            .map(|r| r.as_ref().chars().collect())
            .collect();

        let Some(first) = lines.first() else {
            return Err(GridProblem::Empty.into());
        };
        let (n_rows, n_cols) = (lines.len(), first.len());
        if n_rows > MAX_DIM || n_cols > MAX_DIM {
            return Err(GridProblem::TooLarge { rows: n_rows, cols: n_cols }.into());
        }

        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (row, line) in lines.iter().enumerate() {
            if line.len() != n_cols {
                return Err(GridProblem::Ragged {
                    row,
                    expected: n_cols,
                    found: line.len(),
                }
                .into());
            }
            cells.extend_from_slice(line);
        }
        if n_cols == 0 {
            return Err(GridProblem::Empty.into());
        }

        debug!(rows = n_rows, cols = n_cols, "grid built");
        Ok(Self { cells, rows: n_rows, cols: n_cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn row(&self, r: usize) -> &[char] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    /// Rows rendered back to strings, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.rows).map(|r| self.row(r).iter().collect())
    }

    fn at(&self, r: usize, c: usize) -> char {
        self.cells[r * self.cols + c]
    }

    /// True if `word` reads left-to-right along some row or top-to-bottom
    /// down some column, entirely inside the grid. Comparison is exact.
    /// The empty word is never reported as present.
    pub fn contains(&self, word: &str) -> bool {
        let word: Vec<char> = word.chars().collect();
        if word.is_empty() || word.len() > self.rows.max(self.cols) {
            return false;
        }
        (0..self.rows).any(|r| {
            (0..self.cols).any(|c| self.matches_across(r, c, &word) || self.matches_down(r, c, &word))
        })
    }

    fn matches_across(&self, r: usize, c: usize, word: &[char]) -> bool {
        c + word.len() <= self.cols
            && word.iter().enumerate().all(|(i, &ch)| self.at(r, c + i) == ch)
    }

    fn matches_down(&self, r: usize, c: usize, word: &[char]) -> bool {
        r + word.len() <= self.rows
            && word.iter().enumerate().all(|(i, &ch)| self.at(r + i, c) == ch)
    }
}
