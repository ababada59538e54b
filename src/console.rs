// Kernel console for My-OS
// Owns the single VGA text console behind a spin lock

use core::fmt::{self, Write};

use myos_console::Console;
use myos_driver_video::VgaTextDriver;
use spin::Mutex;

pub type KernelConsole = Console<VgaTextDriver>;

// Global console, None until kernel_main binds the VGA buffer
pub static CONSOLE: Mutex<Option<KernelConsole>> = Mutex::new(None);

pub fn init(console: KernelConsole) {
    *CONSOLE.lock() = Some(console);
}

// Run f against the console, None before init
pub fn with<R>(f: impl FnOnce(&mut KernelConsole) -> R) -> Option<R> {
    CONSOLE.lock().as_mut().map(f)
}

// Like with, but gives up instead of spinning when the console is held
// (log records and panics raised while printing)
pub fn try_with<R>(f: impl FnOnce(&mut KernelConsole) -> R) -> Option<R> {
    CONSOLE.try_lock()?.as_mut().map(f)
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    with(|console| {
        let _ = console.write_fmt(args);
    });
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::console::_print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\n")
    };
    ($($arg:tt)*) => {
        $crate::print!("{}\n", format_args!($($arg)*))
    };
}
