//! Hardware Driver Traits for My-OS
//!
//! This crate defines the trait interfaces that hardware drivers implement.
//! The console subsystem talks to display hardware through [`TextDevice`]
//! without knowing which driver (or in-memory stand-in) sits behind it.
//!
//! # Debug Features
//!
//! Enable debug output for the video subsystem at compile time:
//! ```toml
//! myos-driver-traits = { path = "...", features = ["debug-video"] }
//! ```
//!
//! Debug records are routed through the `log` facade under the `video`
//! target, so they end up wherever the kernel installed its logger.

#![cfg_attr(not(test), no_std)]

pub mod text;
mod debug;

pub use text::*;

#[doc(hidden)]
pub use log as __log;

/// Common error type for driver operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    /// Invalid state for this operation
    #[error("invalid state for this operation")]
    InvalidState,
    /// Device busy (already claimed)
    #[error("device busy")]
    Busy,
}

pub type DriverResult<T> = Result<T, DriverError>;

/// Driver lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Driver is loaded but not initialized
    Loaded,
    /// Driver is initialized and ready to start
    Ready,
    /// Driver is active and operational
    Active,
    /// Driver is stopped
    Stopped,
}

/// Base trait for all drivers
pub trait Driver {
    /// Get current driver state
    fn state(&self) -> DriverState;

    /// Initialize the driver
    fn init(&mut self) -> DriverResult<()>;

    /// Start the driver (after init)
    fn start(&mut self) -> DriverResult<()>;

    /// Stop the driver
    fn stop(&mut self) -> DriverResult<()>;
}
