//! Unified error type for `rank_io`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    /// The game source (or filter list) could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The game source (or filter list) could not be written.
    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A game record was missing a `winner` or `loser` field, or the top-level
    /// document was not a JSON array of such records.
    #[error("malformed game record in {path}: {reason}")]
    MalformedGame { path: String, reason: String },

    /// Generic JSON parse/serialize failure not covered by the above.
    #[error("json error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
