//! Standard VGA Text-Mode Driver
//!
//! Exposes the memory-mapped 80-column text buffer as a [`TextDevice`] and
//! drives the blinking hardware cursor through the CRTC registers.

use core::sync::atomic::{AtomicBool, Ordering};

use myos_driver_traits::{debug_video, Driver, DriverError, DriverResult, DriverState};
use myos_driver_traits::TextDevice;

/// VGA CRTC I/O ports
const VGA_CRTC_INDEX: u16 = 0x3D4;
const VGA_CRTC_DATA: u16 = 0x3D5;

/// CRTC registers
const CRTC_CURSOR_START: u8 = 0x0A;
const CRTC_CURSOR_END: u8 = 0x0B;
const CRTC_CURSOR_HIGH: u8 = 0x0E;
const CRTC_CURSOR_LOW: u8 = 0x0F;

/// Bit 5 of the cursor start register hides the cursor
const CURSOR_DISABLE: u8 = 0x20;

/// Underline cursor: scanlines 14-15 of a 16-line glyph
const CURSOR_SCANLINE_START: u8 = 14;
const CURSOR_SCANLINE_END: u8 = 15;

/// VGA text memory base address
pub const VGA_TEXT_BUFFER: usize = 0xB8000;

/// Columns of the standard text mode
pub const VGA_COLUMNS: usize = 80;

/// Rows of the standard 80x25 text mode
pub const VGA_MAX_ROWS: usize = 25;

/// Rows addressed by the console.
///
/// The hardware mode has [`VGA_MAX_ROWS`] rows; with 24 the bottom hardware
/// row is never written or cleared. Pick the real height for the target with
/// the `ROWS` parameter of [`VgaTextDriver`].
pub const VGA_ROWS: usize = 24;

static CLAIMED: AtomicBool = AtomicBool::new(false);

/// VGA text-mode driver
///
/// Owns the text buffer exclusively; there is no way to clone it.
pub struct VgaTextDriver<const ROWS: usize = VGA_ROWS> {
    buffer: *mut u16,
    state: DriverState,
}

// The buffer pointer is only dereferenced through `&self`/`&mut self`.
unsafe impl<const ROWS: usize> Send for VgaTextDriver<ROWS> {}

impl<const ROWS: usize> VgaTextDriver<ROWS> {
    const GEOMETRY_OK: () = assert!(ROWS > 0 && ROWS <= VGA_MAX_ROWS, "VGA text rows out of range");

    /// Claim the hardware text buffer
    ///
    /// Fails with [`DriverError::Busy`] once the buffer has been handed out.
    pub fn take() -> DriverResult<Self> {
        if CLAIMED.swap(true, Ordering::AcqRel) {
            return Err(DriverError::Busy);
        }
        debug_video!("claimed VGA text buffer at {:#x} ({}x{})", VGA_TEXT_BUFFER, VGA_COLUMNS, ROWS);
        // SAFETY: the CLAIMED flag guarantees this is the only handle to the
        // identity-mapped text buffer.
        Ok(unsafe { Self::from_raw(VGA_TEXT_BUFFER as *mut u16) })
    }

    /// Bind the driver to an arbitrary cell buffer
    ///
    /// # Safety
    ///
    /// `buffer` must point to `VGA_COLUMNS * ROWS` writable `u16` cells that
    /// stay valid for the driver's lifetime and are not accessed through any
    /// other path.
    pub unsafe fn from_raw(buffer: *mut u16) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::GEOMETRY_OK;
        VgaTextDriver {
            buffer,
            state: DriverState::Loaded,
        }
    }

    fn check_index(&self, index: usize) {
        let count = VGA_COLUMNS * ROWS;
        if index >= count {
            panic!("VGA cell index {} out of range (surface has {} cells)", index, count);
        }
    }

    /// Program the cursor scanline range and make it visible
    fn enable_cursor(&mut self) {
        // SAFETY: CRTC ports are always present in VGA-compatible text mode.
        unsafe {
            outb(VGA_CRTC_INDEX, CRTC_CURSOR_START);
            outb(VGA_CRTC_DATA, (inb(VGA_CRTC_DATA) & 0xC0) | CURSOR_SCANLINE_START);
            outb(VGA_CRTC_INDEX, CRTC_CURSOR_END);
            outb(VGA_CRTC_DATA, (inb(VGA_CRTC_DATA) & 0xE0) | CURSOR_SCANLINE_END);
        }
    }

    fn disable_cursor(&mut self) {
        // SAFETY: see enable_cursor.
        unsafe {
            outb(VGA_CRTC_INDEX, CRTC_CURSOR_START);
            outb(VGA_CRTC_DATA, CURSOR_DISABLE);
        }
    }
}

impl<const ROWS: usize> Driver for VgaTextDriver<ROWS> {
    fn state(&self) -> DriverState {
        self.state
    }

    fn init(&mut self) -> DriverResult<()> {
        if self.state == DriverState::Active {
            return Err(DriverError::InvalidState);
        }
        self.enable_cursor();
        self.state = DriverState::Ready;
        log::debug!("vga: initialized {}x{} text mode", VGA_COLUMNS, ROWS);
        Ok(())
    }

    fn start(&mut self) -> DriverResult<()> {
        match self.state {
            DriverState::Ready | DriverState::Stopped => {
                self.state = DriverState::Active;
                Ok(())
            }
            _ => Err(DriverError::InvalidState),
        }
    }

    fn stop(&mut self) -> DriverResult<()> {
        if self.state != DriverState::Active {
            return Err(DriverError::InvalidState);
        }
        self.disable_cursor();
        self.state = DriverState::Stopped;
        log::debug!("vga: stopped");
        Ok(())
    }
}

impl<const ROWS: usize> TextDevice for VgaTextDriver<ROWS> {
    fn columns(&self) -> usize {
        VGA_COLUMNS
    }

    fn rows(&self) -> usize {
        ROWS
    }

    fn read_cell(&self, index: usize) -> u16 {
        self.check_index(index);
        // SAFETY: index checked against the surface size above.
        unsafe { core::ptr::read_volatile(self.buffer.add(index)) }
    }

    fn write_cell(&mut self, index: usize, value: u16) {
        self.check_index(index);
        // SAFETY: index checked against the surface size above.
        unsafe { core::ptr::write_volatile(self.buffer.add(index), value) }
    }

    fn set_cursor(&mut self, row: usize, column: usize) {
        if self.state != DriverState::Active {
            return;
        }
        let offset = cursor_offset(row, column);
        // SAFETY: see enable_cursor.
        unsafe {
            outb(VGA_CRTC_INDEX, CRTC_CURSOR_LOW);
            outb(VGA_CRTC_DATA, (offset & 0xFF) as u8);
            outb(VGA_CRTC_INDEX, CRTC_CURSOR_HIGH);
            outb(VGA_CRTC_DATA, (offset >> 8) as u8);
        }
    }
}

/// Linear cell offset the CRTC expects for a cursor position
pub const fn cursor_offset(row: usize, column: usize) -> u16 {
    (row * VGA_COLUMNS + column) as u16
}

/// Write to VGA port
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[inline]
unsafe fn outb(port: u16, value: u8) {
    core::arch::asm!(
        "out dx, al",
        in("dx") port,
        in("al") value,
        options(nomem, nostack, preserves_flags)
    );
}

/// Read from VGA port
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[inline]
unsafe fn inb(port: u16) -> u8 {
    let value: u8;
    core::arch::asm!(
        "in al, dx",
        in("dx") port,
        out("al") value,
        options(nomem, nostack, preserves_flags)
    );
    value
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
unsafe fn outb(_port: u16, _value: u8) {}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
unsafe fn inb(_port: u16) -> u8 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver_over(cells: &mut [u16; VGA_COLUMNS * VGA_ROWS]) -> VgaTextDriver {
        unsafe { VgaTextDriver::from_raw(cells.as_mut_ptr()) }
    }

    #[test]
    fn test_geometry() {
        let mut cells = [0u16; VGA_COLUMNS * VGA_ROWS];
        let driver = driver_over(&mut cells);
        assert_eq!(driver.columns(), 80);
        assert_eq!(driver.rows(), 24);
        assert_eq!(driver.cell_count(), 1920);
    }

    #[test]
    fn test_cells_are_written_through() {
        let mut cells = [0u16; VGA_COLUMNS * VGA_ROWS];
        {
            let mut driver = driver_over(&mut cells);
            driver.write_cell(81, 0x0741);
            assert_eq!(driver.read_cell(81), 0x0741);
        }
        assert_eq!(cells[81], 0x0741);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_write_past_end_panics() {
        let mut cells = [0u16; VGA_COLUMNS * VGA_ROWS];
        let mut driver = driver_over(&mut cells);
        driver.write_cell(VGA_COLUMNS * VGA_ROWS, 0);
    }

    #[test]
    fn test_take_hands_out_one_driver() {
        let first: DriverResult<VgaTextDriver> = VgaTextDriver::take();
        let second: DriverResult<VgaTextDriver> = VgaTextDriver::take();
        assert!(first.is_ok());
        assert_eq!(second.err(), Some(DriverError::Busy));
    }

    #[test]
    fn test_lifecycle_requires_init_before_start() {
        let mut cells = [0u16; VGA_COLUMNS * VGA_ROWS];
        let mut driver = driver_over(&mut cells);
        assert_eq!(driver.state(), DriverState::Loaded);
        assert_eq!(driver.start(), Err(DriverError::InvalidState));
        assert_eq!(driver.stop(), Err(DriverError::InvalidState));
    }

    // The transitions below set `state` directly so no CRTC port is touched

    #[test]
    fn test_init_on_active_driver_is_rejected() {
        let mut cells = [0u16; VGA_COLUMNS * VGA_ROWS];
        let mut driver = driver_over(&mut cells);
        driver.state = DriverState::Active;
        assert_eq!(driver.init(), Err(DriverError::InvalidState));
        assert_eq!(driver.state(), DriverState::Active);
    }

    #[test]
    fn test_start_from_ready_and_stopped() {
        let mut cells = [0u16; VGA_COLUMNS * VGA_ROWS];
        let mut driver = driver_over(&mut cells);

        driver.state = DriverState::Ready;
        assert_eq!(driver.start(), Ok(()));
        assert_eq!(driver.state(), DriverState::Active);

        driver.state = DriverState::Stopped;
        assert_eq!(driver.start(), Ok(()));
        assert_eq!(driver.state(), DriverState::Active);
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut cells = [0u16; VGA_COLUMNS * VGA_ROWS];
        let mut driver = driver_over(&mut cells);
        driver.state = DriverState::Active;
        assert_eq!(driver.start(), Err(DriverError::InvalidState));
    }

    #[test]
    fn test_stop_outside_active_is_rejected() {
        let mut cells = [0u16; VGA_COLUMNS * VGA_ROWS];
        let mut driver = driver_over(&mut cells);
        for state in [DriverState::Loaded, DriverState::Ready, DriverState::Stopped] {
            driver.state = state;
            assert_eq!(driver.stop(), Err(DriverError::InvalidState));
            assert_eq!(driver.state(), state);
        }
    }

    #[test]
    fn test_cursor_offset() {
        assert_eq!(cursor_offset(0, 0), 0);
        assert_eq!(cursor_offset(1, 0), 80);
        assert_eq!(cursor_offset(23, 79), 1919);
    }
}
