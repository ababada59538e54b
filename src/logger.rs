//! Console log sink
//!
//! Routes `log` records to the kernel console as `[LEVEL] message` lines.
//! Records raised while the console is already locked (for example from
//! inside a console operation) are dropped.

use core::fmt::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::console;

/// Max level installed by [`init`]
pub const MAX_LEVEL: LevelFilter = if cfg!(feature = "verbose-log") {
    LevelFilter::Trace
} else {
    LevelFilter::Info
};

static LOGGER: ConsoleLogger = ConsoleLogger::new(MAX_LEVEL);

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        console::try_with(|console| {
            let _ = write_record(console, record.level(), record.args());
        });
    }

    fn flush(&self) {}
}

/// Format one record as a console line
pub fn write_record<W: Write>(out: &mut W, level: Level, args: &fmt::Arguments) -> fmt::Result {
    writeln!(out, "[{}] {}", level, args)
}

/// Install the console sink
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(MAX_LEVEL);
    Ok(())
}
