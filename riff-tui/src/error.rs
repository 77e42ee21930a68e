//! Error types for riff-tui
//!
//! Wraps core-library errors and terminal/IO errors for unified handling
//! at the application boundary.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] libriffwire::RiffwireError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application state error
    #[error("Application error: {0}")]
    Application(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
