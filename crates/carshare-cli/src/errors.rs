use carshare_core::ExError;
use thiserror::Error;

/// Failures that end a console session
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stdin reached end of file
    #[error("Input closed")]
    InputClosed,

    #[error(transparent)]
    Storage(#[from] ExError),
}

pub type Result<T> = std::result::Result<T, CliError>;
