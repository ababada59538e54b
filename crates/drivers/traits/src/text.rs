//! Text Device Trait
//!
//! Implemented by character-cell displays (VGA text mode, in-memory buffers).
//! Used by the console subsystem

/// Character-cell display surface
///
/// Cells are raw 16-bit hardware values (glyph in the low byte, attribute
/// in the high byte) stored row-major: the cell at `(row, col)` lives at
/// index `row * columns() + col`.
pub trait TextDevice {
    /// Number of character columns
    fn columns(&self) -> usize;

    /// Number of character rows
    fn rows(&self) -> usize;

    /// Total number of cells on the surface
    fn cell_count(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Read the raw cell at `index`
    ///
    /// Panics if `index >= cell_count()`.
    fn read_cell(&self, index: usize) -> u16;

    /// Write the raw cell at `index`
    ///
    /// Panics if `index >= cell_count()`.
    fn write_cell(&mut self, index: usize, value: u16);

    /// Move the visible cursor, if the device has one
    fn set_cursor(&mut self, _row: usize, _column: usize) {}
}
