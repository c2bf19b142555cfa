use std::path::PathBuf;

/// Error type for INDEX parsing and queries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An INDEX line did not split into exactly 13 `|`-separated fields.
    #[error("malformed INDEX record: expected 13 fields, found {found}")]
    MalformedRecord {
        /// Number of fields actually present.
        found: usize,
    },

    /// A record failed to parse while loading a whole index.
    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number in the source.
        line: usize,
        /// The underlying parse error.
        #[source]
        source: Box<Error>,
    },

    /// Unknown dependency kind name.
    #[error("invalid dependency kind: {0}")]
    InvalidDepKind(String),

    /// A query key does not exist in the index.
    #[error("not found: {0}")]
    NotFound(String),

    /// The INDEX file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// Path of the INDEX file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` for query misses, which are never fatal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result type for INDEX operations.
pub type Result<T> = std::result::Result<T, Error>;
