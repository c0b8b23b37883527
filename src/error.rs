//! Error types for bitext.

use thiserror::Error;

/// Result type for bitext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for bitext operations.
///
/// Queries never fail on input shape: unmatched searches return empty
/// maps, malformed rows degrade to blank placeholders, and unresolvable
/// alignment links contribute no edges. Loading corpus data from a reader
/// or path is the only fallible surface.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error while reading corpus data.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
