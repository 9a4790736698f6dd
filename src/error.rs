//! Error types for the slidec library.

use std::io;
use thiserror::Error;

/// Result type alias for slidec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during slide compilation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input produced no slides at all.
    ///
    /// This is the only hard failure the compiler raises: after full
    /// extraction the slide sequence was empty, which usually means the
    /// input HTML had no recognizable heading, paragraph, list, or table
    /// structure. All other malformed input degrades to a best-effort
    /// result instead of failing.
    #[error(
        "no slides produced: the input HTML contains no recognizable \
         heading, paragraph, list, or table content"
    )]
    NoSlides,

    /// Error during rendering (JSON serialization).
    #[error("Rendering error: {0}")]
    Render(String),
}
