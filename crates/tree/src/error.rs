use std::path::PathBuf;
use thiserror::Error;

/// Errors from building a directory tree.
#[derive(Error, Debug)]
pub enum Error {
    /// Traversal options were rejected before any filesystem access.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A directory could not be listed, or an entry could not be inspected.
    #[error("cannot read {}: {source}", path.display())]
    PathUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An exclusion pattern could not be compiled into a matcher.
    #[error("invalid exclude pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
