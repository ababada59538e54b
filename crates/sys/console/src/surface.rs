//! In-memory text surface
//!
//! Same row-major cell layout as the hardware buffer, backed by a plain
//! array. Lets the console run without display hardware.

use myos_driver_traits::TextDevice;

use crate::cell::Cell;

/// Fixed-size in-memory cell buffer
#[derive(Debug, Clone)]
pub struct MemorySurface<const COLUMNS: usize, const ROWS: usize> {
    cells: [[u16; COLUMNS]; ROWS],
    cursor: (usize, usize),
}

impl<const COLUMNS: usize, const ROWS: usize> MemorySurface<COLUMNS, ROWS> {
    /// All cells zeroed, cursor at the origin
    pub const fn new() -> Self {
        Self {
            cells: [[0; COLUMNS]; ROWS],
            cursor: (0, 0),
        }
    }

    /// Cell at `(column, row)`, `None` outside the surface
    pub fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        self.cells
            .get(row)
            .and_then(|line| line.get(column))
            .map(|&raw| Cell::from_raw(raw))
    }

    /// Glyph bytes of one row
    ///
    /// Panics if `row >= ROWS`.
    pub fn row_glyphs(&self, row: usize) -> [u8; COLUMNS] {
        let mut glyphs = [0u8; COLUMNS];
        for (glyph, &raw) in glyphs.iter_mut().zip(self.cells[row].iter()) {
            *glyph = Cell::from_raw(raw).glyph();
        }
        glyphs
    }

    /// Last position reported through [`TextDevice::set_cursor`], as `(row, column)`
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    fn locate(&self, index: usize) -> (usize, usize) {
        if index >= COLUMNS * ROWS {
            panic!("cell index {} out of range (surface has {} cells)", index, COLUMNS * ROWS);
        }
        (index / COLUMNS, index % COLUMNS)
    }
}

impl<const COLUMNS: usize, const ROWS: usize> Default for MemorySurface<COLUMNS, ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLUMNS: usize, const ROWS: usize> TextDevice for MemorySurface<COLUMNS, ROWS> {
    fn columns(&self) -> usize {
        COLUMNS
    }

    fn rows(&self) -> usize {
        ROWS
    }

    fn read_cell(&self, index: usize) -> u16 {
        let (row, column) = self.locate(index);
        self.cells[row][column]
    }

    fn write_cell(&mut self, index: usize, value: u16) {
        let (row, column) = self.locate(index);
        self.cells[row][column] = value;
    }

    fn set_cursor(&mut self, row: usize, column: usize) {
        self.cursor = (row, column);
    }
}
