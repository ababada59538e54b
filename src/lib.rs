#![cfg_attr(not(test), no_std)]

pub mod banner;
pub mod console;
pub mod logger;

/// Stop the CPU for good
pub fn halt() -> ! {
    loop {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        unsafe {
            core::arch::asm!("hlt", options(nomem, nostack))
        };
        #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
        core::hint::spin_loop();
    }
}
