//! Connected regions of a grid of cells. Each active cell is a node joined to the active cells
//! directly above, below, left, and right of it, so counting regions is counting the connected
//! components of that implicit graph.
//!
//! # Examples
//!
//! ```
//! use pathwork::graph::grid::Grid;
//!
//! let mut islands: Grid = "11011\n\
//!                          11011\n\
//!                          10100\n\
//!                          00011"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(islands.count_connected_regions(), 4);
//!
//! // Counting sinks every island.
//! assert_eq!(islands.active_count(), 0);
//! ```

use std::fmt;
use std::str::FromStr;

/// Problems building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells but the grid is {expected} cells wide")]
    Ragged {
        /// Zero based index of the offending row.
        row: usize,
        /// The width of the first row.
        expected: usize,
        /// The width of the offending row.
        found: usize,
    },
    /// A character other than `'0'` or `'1'` appeared in a textual grid.
    #[error("invalid cell {found:?} at row {row}, column {column}: expected '0' or '1'")]
    InvalidCell {
        /// Zero based row index.
        row: usize,
        /// Zero based column index.
        column: usize,
        /// The character that was found.
        found: char,
    },
}

/// A rectangular grid of cells that are either active or inactive, stored row by row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Builds a grid from its rows. Every row must be as wide as the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwork::graph::grid::{Grid, GridError};
    ///
    /// let grid = Grid::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
    /// assert_eq!(grid.dimensions(), (2, 2));
    ///
    /// let ragged = Grid::from_rows(vec![vec![true, false], vec![true]]);
    /// assert_eq!(
    ///     ragged,
    ///     Err(GridError::Ragged { row: 1, expected: 2, found: 1 })
    /// );
    /// ```
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: AsRef<[bool]>,
    {
        let mut grid = Self::default();
        for (index, row) in rows.into_iter().enumerate() {
            grid.push_row(index, row.as_ref().iter().copied())?;
        }
        Ok(grid)
    }

    /// `(rows, columns)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Whether the cell is active. Cells outside the grid are not.
    pub fn is_active(&self, row: usize, column: usize) -> bool {
        self.index(row, column).map_or(false, |index| self.cells[index])
    }

    /// How many cells are active.
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|active| **active).count()
    }

    /// Counts the groups of active cells connected horizontally or vertically.
    ///
    /// Every cell that gets counted is switched off, so afterwards the grid is empty. Clone the
    /// grid first to keep it.
    pub fn count_connected_regions(&mut self) -> usize {
        let mut regions = 0;
        for row in 0..self.rows {
            for column in 0..self.columns {
                if self.is_active(row, column) {
                    self.flood_fill(row, column);
                    regions += 1;
                }
            }
        }

        tracing::debug!(regions, rows = self.rows, columns = self.columns, "counted regions");
        regions
    }

    /// Switches off every active cell connected to `(row, column)`.
    fn flood_fill(&mut self, row: usize, column: usize) {
        let mut stack = vec![(row, column)];
        while let Some((row, column)) = stack.pop() {
            let index = match self.index(row, column) {
                Some(index) if self.cells[index] => index,
                _ => continue,
            };
            self.cells[index] = false;

            let neighbors = [
                (row.checked_add(1), Some(column)),
                (row.checked_sub(1), Some(column)),
                (Some(row), column.checked_add(1)),
                (Some(row), column.checked_sub(1)),
            ];
            for (row, column) in neighbors {
                if let (Some(row), Some(column)) = (row, column) {
                    if self.is_active(row, column) {
                        stack.push((row, column));
                    }
                }
            }
        }
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    fn push_row(
        &mut self,
        index: usize,
        cells: impl Iterator<Item = bool>,
    ) -> Result<(), GridError> {
        let before = self.cells.len();
        self.cells.extend(cells);
        let width = self.cells.len() - before;

        if self.rows == 0 {
            self.columns = width;
        } else if width != self.columns {
            return Err(GridError::Ragged {
                row: index,
                expected: self.columns,
                found: width,
            });
        }

        self.rows += 1;
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses one row per line with `'1'` for an active cell and `'0'` for an inactive one.
    /// Surrounding whitespace and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::default();
        let lines = s.lines().map(str::trim).filter(|line| !line.is_empty());
        for (row, line) in lines.enumerate() {
            let cells = line
                .chars()
                .enumerate()
                .map(|(column, found)| match found {
                    '1' => Ok(true),
                    '0' => Ok(false),
                    _ => Err(GridError::InvalidCell { row, column, found }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            grid.push_row(row, cells.into_iter())?;
        }

        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                f.write_str(if self.is_active(row, column) { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
