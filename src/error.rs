//! Error types for the snapshot tool

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for snapshot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while collecting URLs or rendering pages
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to start a renderer (missing binary, browser launch failure)
    #[error("Failed to launch renderer: {0}")]
    LaunchError(String),

    /// Failed to load a URL in the fallback browser
    #[error("Failed to load URL: {0}")]
    LoadError(String),

    /// The renderer ran but did not produce a PDF
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Bounded wait elapsed without the page body appearing
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),

    /// Filesystem error while writing output or scanning input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The top-level input path exists as neither a file nor a directory
    #[error("{} is not a valid file or directory", .0.display())]
    InvalidInput(PathBuf),
}

// headless_chrome reports through anyhow; collapse anything not mapped at the
// call site into a rendering failure.
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::RenderError(err.to_string())
    }
}
