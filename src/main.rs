#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]

use core::fmt::Write;
use core::panic::PanicInfo;

use myos::{banner, console, halt, logger};
use myos_console::{pack_attribute, Color, Console};
use myos_driver_traits::Driver;
use myos_driver_video::VgaTextDriver;

// 64-bit entry point, reached once from the loader with a valid stack
#[cfg(not(test))]
#[no_mangle]
pub extern "C" fn _start() -> ! {
    kernel_main();
    halt()
}

#[no_mangle]
pub extern "C" fn kernel_main() {
    // Only fails if something already claimed the text buffer
    let Ok(mut driver) = VgaTextDriver::take() else {
        return;
    };
    let cursor = driver.init().and_then(|()| driver.start());

    console::init(Console::new(driver));
    console::with(banner::write_banner);

    if logger::init().is_ok() {
        if let Err(err) = cursor {
            log::warn!("vga: hardware cursor disabled: {}", err);
        }
    }
}

#[cfg_attr(not(test), panic_handler)]
#[allow(dead_code)]
fn panic(info: &PanicInfo) -> ! {
    console::try_with(|console| {
        console.set_color(pack_attribute(Color::White, Color::Red));
        let _ = write!(console, "\nKERNEL PANIC: {}\n", info);
    });
    halt()
}
