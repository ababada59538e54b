//! Boot banner
//!
//! `Welcome to My-OS!` with the logo in two colors. Only uses the public
//! console API.

use myos_console::{pack_attribute, Attribute, Color, Console, TextDevice};

pub const LOGO_MY_COLOR: Attribute = pack_attribute(Color::LightRed, Color::Black);
pub const LOGO_OS_COLOR: Attribute = pack_attribute(Color::LightBlue, Color::Black);

/// Write the two-color logo, leaving the console's attribute as it was
pub fn write_logo<D: TextDevice>(console: &mut Console<D>) {
    let previous = console.attribute();

    console.set_color(LOGO_MY_COLOR);
    console.put_char(b'M');
    console.put_char(b'y');
    console.set_color(LOGO_OS_COLOR);
    console.write_string("-OS");

    console.set_color(previous);
}

/// Write `Welcome to My-OS!` and end the line
pub fn write_banner<D: TextDevice>(console: &mut Console<D>) {
    console.write_string("Welcome to ");
    write_logo(console);
    console.write_string("!\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use myos_console::{Cell, MemorySurface};

    #[test]
    fn test_banner_is_first_row() {
        let mut console = Console::new(MemorySurface::<80, 24>::new());
        write_banner(&mut console);

        let text = b"Welcome to My-OS!";
        assert_eq!(&console.device().row_glyphs(0)[..text.len()], text);
        assert_eq!(console.cell_at(text.len(), 0), Some(Cell::blank(Attribute::DEFAULT)));
        assert_eq!(console.cursor(), (1, 0));
    }

    #[test]
    fn test_logo_colors() {
        let mut console = Console::new(MemorySurface::<80, 24>::new());
        write_banner(&mut console);

        let attr_at = |x| console.cell_at(x, 0).map(Cell::attribute);
        // "Welcome to " is 11 cells
        assert_eq!(attr_at(10), Some(Attribute::DEFAULT));
        assert_eq!(attr_at(11), Some(LOGO_MY_COLOR));
        assert_eq!(attr_at(12), Some(LOGO_MY_COLOR));
        for x in 13..16 {
            assert_eq!(attr_at(x), Some(LOGO_OS_COLOR));
        }
        assert_eq!(attr_at(16), Some(Attribute::DEFAULT));
        assert_ne!(LOGO_MY_COLOR, LOGO_OS_COLOR);
    }

    #[test]
    fn test_logo_restores_attribute() {
        let mut console = Console::new(MemorySurface::<80, 24>::new());
        let custom = pack_attribute(Color::Green, Color::Blue);
        console.set_color(custom);
        write_logo(&mut console);
        assert_eq!(console.attribute(), custom);
        assert_eq!(console.cursor(), (0, 5));
    }
}
