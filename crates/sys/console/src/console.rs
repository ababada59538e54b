//! Console - cursor state machine over a text surface
//!
//! Characters are written at the cursor, which advances one column at a
//! time and wraps to the next row at the right edge. Running off the bottom
//! row scrolls the whole surface up by one row.

use core::fmt;

use myos_driver_traits::TextDevice;

use crate::cell::{pack_cell, Cell, BLANK_GLYPH, PLACEHOLDER_GLYPH};
use crate::color::{pack_attribute, Attribute, Color};
use crate::error::{ConsoleError, ConsoleResult};

/// Console defaults applied at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub foreground: Color,
    pub background: Color,
}

impl ConsoleConfig {
    pub const fn attribute(&self) -> Attribute {
        pack_attribute(self.foreground, self.background)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            foreground: Color::LightGrey,
            background: Color::Black,
        }
    }
}

/// Text console owning its display surface
///
/// A `Console` only exists initialized: constructing one clears the surface
/// and homes the cursor.
pub struct Console<D: TextDevice> {
    device: D,
    row: usize,
    column: usize,
    attribute: Attribute,
}

impl<D: TextDevice> Console<D> {
    /// Bind `device` with light grey on black
    pub fn new(device: D) -> Self {
        Self::with_config(device, ConsoleConfig::default())
    }

    /// Bind `device`, blank every cell in the configured colors, cursor at (0, 0)
    pub fn with_config(device: D, config: ConsoleConfig) -> Self {
        assert!(
            device.columns() > 0 && device.rows() > 0,
            "console surface must have at least one cell"
        );
        let mut console = Console {
            device,
            row: 0,
            column: 0,
            attribute: config.attribute(),
        };
        console.clear();
        console
    }

    /// Fill the surface with blanks in the current attribute and home the cursor
    pub fn clear(&mut self) {
        let blank = Cell::blank(self.attribute).raw();
        for index in 0..self.device.cell_count() {
            self.device.write_cell(index, blank);
        }
        self.row = 0;
        self.column = 0;
        self.device.set_cursor(0, 0);
        log::debug!(
            "console: cleared {}x{} surface",
            self.device.columns(),
            self.device.rows()
        );
    }

    /// Attribute used by subsequent writes
    pub fn set_color(&mut self, attribute: Attribute) {
        self.attribute = attribute;
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// Cursor position as `(row, column)`
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub fn columns(&self) -> usize {
        self.device.columns()
    }

    pub fn rows(&self) -> usize {
        self.device.rows()
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Cell at column `x`, row `y`
    pub fn cell_at(&self, x: usize, y: usize) -> Option<Cell> {
        self.index_of(x, y)
            .ok()
            .map(|index| Cell::from_raw(self.device.read_cell(index)))
    }

    /// Write one cell at column `x`, row `y` without touching the cursor
    pub fn try_put_cell_at(&mut self, glyph: u8, attribute: Attribute, x: usize, y: usize) -> ConsoleResult<()> {
        let index = self.index_of(x, y)?;
        self.device.write_cell(index, pack_cell(glyph, attribute).raw());
        Ok(())
    }

    /// Write one cell at column `x`, row `y`
    ///
    /// Coordinates outside the surface are a caller bug and panic.
    pub fn put_cell_at(&mut self, glyph: u8, attribute: Attribute, x: usize, y: usize) {
        if let Err(err) = self.try_put_cell_at(glyph, attribute, x, y) {
            panic!("console: {}", err);
        }
    }

    /// Write one glyph byte at the cursor and advance it
    pub fn put_char(&mut self, glyph: u8) {
        self.advance(glyph);
        self.sync_cursor();
    }

    /// Write raw glyph bytes
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &glyph in bytes {
            self.advance(glyph);
        }
        self.sync_cursor();
    }

    /// Write a string, one cell per character
    pub fn write_string(&mut self, s: &str) {
        for ch in s.chars() {
            self.advance(glyph_for(ch));
        }
        self.sync_cursor();
    }

    /// Move every row up by one, blank the last row, cursor to its start
    pub fn scroll(&mut self) {
        let columns = self.device.columns();
        let last = self.device.rows() - 1;

        for index in 0..last * columns {
            let below = self.device.read_cell(index + columns);
            self.device.write_cell(index, below);
        }
        for x in 0..columns {
            self.put_cell_at(BLANK_GLYPH, self.attribute, x, last);
        }

        self.row = last;
        self.column = 0;
        log::trace!("console: scrolled");
    }

    fn advance(&mut self, glyph: u8) {
        if glyph == b'\n' {
            self.column = 0;
            self.next_row();
            return;
        }

        self.put_cell_at(glyph, self.attribute, self.column, self.row);
        self.column += 1;
        if self.column == self.device.columns() {
            self.column = 0;
            self.next_row();
        }
    }

    fn next_row(&mut self) {
        self.row += 1;
        if self.row == self.device.rows() {
            self.scroll();
        }
    }

    fn sync_cursor(&mut self) {
        self.device.set_cursor(self.row, self.column);
    }

    fn index_of(&self, x: usize, y: usize) -> ConsoleResult<usize> {
        let columns = self.device.columns();
        let rows = self.device.rows();
        if x >= columns || y >= rows {
            return Err(ConsoleError::OutOfBounds { x, y, columns, rows });
        }
        Ok(y * columns + x)
    }
}

impl<D: TextDevice> fmt::Write for Console<D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s);
        Ok(())
    }
}

/// Glyph byte for a character: ASCII as is, everything else a placeholder
fn glyph_for(ch: char) -> u8 {
    if ch.is_ascii() {
        ch as u8
    } else {
        PLACEHOLDER_GLYPH
    }
}
