use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    /// A caller broke an argument contract, e.g. an empty word or a shard
    /// selector that isn't a single character.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A shard file or the dataset directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A shard file is not valid JSON, or its top level isn't an object.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// One headword's record doesn't have the shape of an entry.
    #[error("malformed entry {word:?} in {}: {source}", path.display())]
    MalformedEntry {
        path: PathBuf,
        word: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("meaning #{index} of {word:?} has no definition")]
    MissingDefinition { word: String, index: usize },
}

pub type Result<T> = std::result::Result<T, LexiconError>;
