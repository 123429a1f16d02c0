use std::path::PathBuf;

mod error;
mod paths;
mod random_word;
mod shard;
mod validate;
mod word;
mod wordset;

pub use error::{LexiconError, Result};
pub use paths::{default_data_dir, project_path, project_root, WORDSET_DATA_DIR};
pub use shard::{RawEntry, RawMeaning, RawShard, Shard};
pub use validate::{validate_dataset, Issue, ValidationReport, MEANING_KEYS, REQUIRED_ENTRY_KEYS};
pub use word::WordMeaning;
pub use wordset::WordsetLexicon;

pub trait Lexicon: Send + Sync {
    /// Returns every meaning of `word`, in dataset order, or `None` when the
    /// word isn't in the lexicon.
    fn define(&self, word: &str) -> Result<Option<Vec<WordMeaning>>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconSource {
    Wordset,
}

pub fn lexicon_from(source: LexiconSource) -> Box<dyn Lexicon> {
    lexicon_at(source, default_data_dir())
}

pub fn lexicon_at(source: LexiconSource, data_dir: impl Into<PathBuf>) -> Box<dyn Lexicon> {
    match source {
        LexiconSource::Wordset => Box::new(WordsetLexicon::new(data_dir)),
    }
}
