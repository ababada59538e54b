//! Console cell representation
//!
//! Each cell is the raw 16-bit value the display hardware reads: glyph in
//! the low byte, attribute in the high byte.

use crate::color::Attribute;

/// Glyph used for empty cells
pub const BLANK_GLYPH: u8 = b' ';

/// Glyph written in place of characters outside ASCII (a small square in
/// code page 437)
pub const PLACEHOLDER_GLYPH: u8 = 0xFE;

/// A single display cell
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(u16);

impl Cell {
    #[inline]
    pub const fn new(glyph: u8, attribute: Attribute) -> Self {
        pack_cell(glyph, attribute)
    }

    /// Empty (space) cell in the given attribute
    #[inline]
    pub const fn blank(attribute: Attribute) -> Self {
        pack_cell(BLANK_GLYPH, attribute)
    }

    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn glyph(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    #[inline]
    pub const fn attribute(self) -> Attribute {
        Attribute::from_raw((self.0 >> 8) as u8)
    }
}

/// Pack a glyph and attribute into a cell: `glyph | attribute << 8`
#[inline]
pub const fn pack_cell(glyph: u8, attribute: Attribute) -> Cell {
    Cell(glyph as u16 | ((attribute.raw() as u16) << 8))
}
