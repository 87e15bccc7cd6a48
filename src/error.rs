//! Error types for cakewrap
//!
//! Uses `thiserror` for library errors; the binary reports them with `anyhow`.
//! Usage errors abort the wrapper with exit code 2 and are never confused with
//! propagated tool exit codes.

use thiserror::Error;

/// Result type alias for wrapper operations
pub type WrapResult<T> = Result<T, WrapError>;

/// Main error type for wrapper operations
#[derive(Error, Debug)]
pub enum WrapError {
    /// Wrapper invoked without a compiler command
    #[error("no compiler command given - usage: cakewrap <compiler> [args...]")]
    EmptyCommand,

    /// `-c` present but the next argument is not a recognized source file
    #[error("expected a C/C++ source file after '-c', found '{found}'")]
    UnrecognizedSource { found: String },

    /// `-c` is the last argument of the invocation
    #[error("'-c' must be followed by a source file")]
    DanglingCompileFlag,

    /// Compile invocation without an output flag
    #[error("compile invocation has no '-o <output>' flag")]
    MissingOutput,

    /// A flag that takes a separate value appeared last in the invocation
    #[error("flag '{flag}' requires a value")]
    MissingValue { flag: String },

    /// Failed to spawn a subprocess
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
