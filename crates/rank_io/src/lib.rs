//! rank_io — JSON input (games, optional filter list) and output (the
//! parameters/info/ranking document), canonicalized for reproducible bytes.
#![forbid(unsafe_code)]

pub mod canonical_json;
pub mod error;
pub mod input;
pub mod output;

pub use error::IoError;
pub use input::{load_filter, load_games};
pub use output::{write_output, Info, OutputDocument};
