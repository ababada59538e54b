//! Debug macros for driver subsystems
//!
//! These macros compile to nothing when debug features are disabled.

/// Debug print for video subsystem
#[macro_export]
#[cfg(feature = "debug-video")]
macro_rules! debug_video {
    ($($arg:tt)*) => {
        $crate::__log::debug!(target: "video", $($arg)*)
    };
}

#[macro_export]
#[cfg(not(feature = "debug-video"))]
macro_rules! debug_video {
    ($($arg:tt)*) => {};
}
