//! Console error types

/// Console operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    /// Cell coordinates outside the surface
    #[error("cell ({x}, {y}) is outside the {columns}x{rows} surface")]
    OutOfBounds {
        x: usize,
        y: usize,
        columns: usize,
        rows: usize,
    },
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
