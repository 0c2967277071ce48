//! Board module - manages the game grid
//!
//! The board is a `columns x rows` grid where each cell is empty or holds a color.
//! Storage is a flat row-major vector sized once at construction; the dimensions
//! never change afterwards.
//! Coordinates: (x, y) where x ranges 0..columns (left to right), y ranges 0..rows
//! (top to bottom).

use crate::types::{Cell, Color, Coord};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: u16,
    rows: u16,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(columns: u16, rows: u16) -> Self {
        debug_assert!(columns > 0 && rows > 0, "board dimensions must be positive");
        Self {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
        }
    }

    /// Flat index for a signed coordinate, `None` when outside the board
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some(self.offset(x as usize, y as usize))
    }

    /// Flat index for a coordinate the caller already knows is on the board
    #[inline(always)]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.columns as usize && y < self.rows as usize,
            "board access out of range: ({}, {}) on {}x{}",
            x,
            y,
            self.columns,
            self.rows
        );
        y * self.columns as usize + x
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Like [`Board::is_valid`], but the open space above row 0 also counts as free.
    ///
    /// Gravity uses this so a piece that hangs over the top edge can keep falling.
    pub fn is_free_or_above(&self, x: i16, y: i16) -> bool {
        if y < 0 {
            return x >= 0 && x < self.columns as i16;
        }
        self.is_valid(x, y)
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        x < 0 || x >= self.columns as i16 || y < 0 || y >= self.rows as i16
    }

    /// Cells of row `y`, left to right; `None` below the floor
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows as usize {
            return None;
        }
        let start = self.offset(0, y);
        Some(&self.cells[start..start + self.columns as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Check if a row has at least one filled cell
    pub fn row_occupied(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().any(|cell| cell.is_some()))
    }

    /// Write `color` at every on-board coordinate in `cells`.
    ///
    /// Coordinates outside the board (e.g. above row 0) are skipped.
    /// Returns the number of cells written.
    pub fn lock_cells(&mut self, cells: &[Coord], color: Color) -> usize {
        let mut written = 0;
        for &(x, y) in cells {
            if self.set(x, y, Some(color)) {
                written += 1;
            }
        }
        written
    }

    /// Remove every full row, pulling the remaining rows down and refilling the top
    /// with empty rows. Surviving rows keep their relative order.
    ///
    /// Two-pointer compaction from the bottom up; no allocation.
    /// Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.columns as usize;
        let mut write_y = self.rows as usize;
        let mut cleared = 0;

        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = self.offset(0, read_y);
                    let dst = self.offset(0, write_y);
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Convert to rows of cells for testing/display
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.rows as usize)
            .filter_map(|y| self.row(y).map(<[Cell]>::to_vec))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_calculation() {
        let board = Board::new(20, 30);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(19, 0), Some(19));
        assert_eq!(board.index(0, 1), Some(20));
        assert_eq!(board.index(19, 29), Some(599));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(20, 0), None);
        assert_eq!(board.index(0, 30), None);
    }

    #[test]
    fn free_or_above_treats_sky_as_open() {
        let board = Board::new(5, 5);
        assert!(board.is_free_or_above(2, -3));
        assert!(!board.is_free_or_above(-1, -3));
        assert!(!board.is_free_or_above(5, -1));
        assert!(!board.is_free_or_above(2, 5));
    }

    #[test]
    fn clear_full_rows_keeps_order_of_survivors() {
        let mut board = Board::new(3, 5);
        // Row 1 marker, row 2 full, row 3 marker, row 4 full.
        board.set(0, 1, Some(Color::Red));
        for x in 0..3 {
            board.set(x, 2, Some(Color::Blue));
            board.set(x, 4, Some(Color::Blue));
        }
        board.set(2, 3, Some(Color::Green));

        assert_eq!(board.clear_full_rows(), 2);

        let rows = board.to_rows();
        assert_eq!(rows[0], vec![None, None, None]);
        assert_eq!(rows[1], vec![None, None, None]);
        assert_eq!(rows[2], vec![None, None, None]);
        assert_eq!(rows[3], vec![Some(Color::Red), None, None]);
        assert_eq!(rows[4], vec![None, None, Some(Color::Green)]);
    }

    #[test]
    fn row_below_the_floor_is_none() {
        let mut board = Board::new(3, 2);
        board.set(1, 1, Some(Color::Red));
        assert_eq!(board.row(1), Some(&[None, Some(Color::Red), None][..]));
        assert_eq!(board.row(2), None);
        assert_eq!(board.row(usize::MAX), None);
    }

    #[test]
    fn lock_cells_skips_cells_above_the_board() {
        let mut board = Board::new(4, 4);
        let written = board.lock_cells(&[(0, -1), (1, -1), (1, 0), (2, 0)], Color::Cyan);
        assert_eq!(written, 2);
        assert_eq!(board.get(1, 0), Some(Some(Color::Cyan)));
        assert_eq!(board.get(2, 0), Some(Some(Color::Cyan)));
        assert_eq!(board.filled_count(), 2);
    }
}
