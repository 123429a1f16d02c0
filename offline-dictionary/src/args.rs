use std::path::PathBuf;

use argh::FromArgs;

/// Environment variable consulted when `--data-dir` isn't given.
pub const DATA_DIR_ENV: &str = "WORDSET_DATA_DIR";

/// Look up words in the offline Wordset dictionary.
#[derive(FromArgs, Debug)]
pub struct Args {
    /// directory holding the shard files (a.json .. z.json, misc.json)
    #[argh(option, short = 'd')]
    pub data_dir: Option<PathBuf>,
    /// words to define; starts an interactive prompt when empty
    #[argh(positional)]
    pub words: Vec<String>,
}

impl Args {
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(lexicon::default_data_dir)
    }
}

pub fn load() -> Args {
    argh::from_env()
}
