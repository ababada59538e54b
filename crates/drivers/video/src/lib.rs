//! My-OS Video Driver Subsystem
//!
//! Provides the VGA text-mode driver used by the boot console.

#![cfg_attr(not(test), no_std)]

pub mod vga;

pub use vga::{VgaTextDriver, VGA_COLUMNS, VGA_MAX_ROWS, VGA_ROWS, VGA_TEXT_BUFFER};
