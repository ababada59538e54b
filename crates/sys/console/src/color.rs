//! Color handling for console cells
//!
//! The hardware palette has 16 fixed colors. An attribute byte carries the
//! foreground code in its low nibble and the background code in its high
//! nibble.

/// Hardware text-mode palette
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGrey = 7,
    DarkGrey = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    LightBrown = 14,
    White = 15,
}

impl Color {
    /// All palette entries, indexed by code
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Brown,
        Color::LightGrey,
        Color::DarkGrey,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightRed,
        Color::LightMagenta,
        Color::LightBrown,
        Color::White,
    ];

    /// Palette code (0-15)
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a palette code, `None` above 15
    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        if (code as usize) < Self::ALL.len() {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }
}

/// Packed foreground/background pair
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute(u8);

impl Attribute {
    /// Light grey on black
    pub const DEFAULT: Self = pack_attribute(Color::LightGrey, Color::Black);

    #[inline]
    pub const fn new(foreground: Color, background: Color) -> Self {
        pack_attribute(foreground, background)
    }

    /// Every byte is a valid attribute: both nibbles are palette codes.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn foreground(self) -> Color {
        Color::ALL[(self.0 & 0x0F) as usize]
    }

    #[inline]
    pub const fn background(self) -> Color {
        Color::ALL[(self.0 >> 4) as usize]
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pack a color pair into an attribute byte: `foreground | background << 4`
#[inline]
pub const fn pack_attribute(foreground: Color, background: Color) -> Attribute {
    Attribute(foreground.code() | (background.code() << 4))
}
