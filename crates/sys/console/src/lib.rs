//! My-OS Text Console
//!
//! A character-cell console over any [`TextDevice`]: 16-bit cells holding a
//! glyph byte and a color attribute byte, a cursor that wraps at the right
//! edge, and a screen that scrolls up by one row when the cursor runs off the
//! bottom.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Console                                      │
//! │  - cursor (row, column), current attribute    │
//! │  - put_char / write_string / scroll           │
//! ├──────────────────────────────────────────────┤
//! │  Cell codec      glyph | attribute << 8       │
//! ├──────────────────────────────────────────────┤
//! │  Color codec     foreground | background << 4 │
//! ├──────────────────────────────────────────────┤
//! │  TextDevice (trait)                           │
//! │  - VGA text buffer, MemorySurface             │
//! └──────────────────────────────────────────────┘
//! ```

#![cfg_attr(not(test), no_std)]

pub mod cell;
pub mod color;
pub mod console;
pub mod error;
pub mod surface;

pub use cell::{pack_cell, Cell, BLANK_GLYPH, PLACEHOLDER_GLYPH};
pub use color::{pack_attribute, Attribute, Color};
pub use console::{Console, ConsoleConfig};
pub use error::{ConsoleError, ConsoleResult};
pub use myos_driver_traits::TextDevice;
pub use surface::MemorySurface;
