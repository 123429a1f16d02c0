use std::path::{Path, PathBuf};

/// Location of the Wordset shards, relative to the project root.
pub const WORDSET_DATA_DIR: &str = "datasets/wordset/data";

/// The workspace root, fixed at compile time so lookups don't depend on the
/// caller's working directory.
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
}

pub fn project_path(relative: impl AsRef<Path>) -> PathBuf {
    project_root().join(relative)
}

pub fn default_data_dir() -> PathBuf {
    project_path(WORDSET_DATA_DIR)
}
