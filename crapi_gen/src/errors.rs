use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the generator crate.
pub type GenResult<T> = Result<T, GenError>;

/// Errors produced while generating headers.
#[derive(Debug, Error)]
pub enum GenError {
    /// The category lists a function the API table has no record for.
    #[error("function '{name}' is listed in category '{category}' but has no entry in the API table")]
    UnresolvedFunction { name: String, category: String },

    /// The banner override could not be read.
    #[error("failed to read copyright banner '{}': {source}", .path.display())]
    Banner {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
