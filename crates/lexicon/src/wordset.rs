use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::{LexiconError, Result};
use crate::paths::default_data_dir;
use crate::shard::{RawEntry, RawShard, Shard};
use crate::{Lexicon, WordMeaning};

/// A [`Lexicon`] reading the Wordset dataset straight from its shard files.
///
/// Nothing is cached: every lookup reads and parses one shard.
#[derive(Debug, Clone)]
pub struct WordsetLexicon {
    data_dir: PathBuf,
}

impl WordsetLexicon {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the shard holding words that start with `first_letter`.
    ///
    /// `first_letter` must be exactly one character. Only ASCII lowercase
    /// letters get a letter shard, so callers are expected to lowercase first.
    pub fn shard_path(&self, first_letter: &str) -> Result<PathBuf> {
        let first = single_char(first_letter)?;
        Ok(self.path_of(Shard::for_char(first)))
    }

    pub(crate) fn path_of(&self, shard: Shard) -> PathBuf {
        self.data_dir.join(shard.file_name())
    }

    /// Reads and parses the shard for `first_letter`.
    pub fn load_shard(&self, first_letter: &str) -> Result<RawShard> {
        let first = single_char(first_letter)?;
        self.read_shard(Shard::for_char(first))
    }

    pub(crate) fn read_shard(&self, shard: Shard) -> Result<RawShard> {
        let path = self.path_of(shard);
        let contents = fs::read_to_string(&path).map_err(|source| LexiconError::DatasetIo {
            path: path.clone(),
            source,
        })?;
        let entries: RawShard = serde_json::from_str(&contents)
            .map_err(|source| LexiconError::Parse { path: path.clone(), source })?;
        debug!("loaded {} headwords from {}", entries.len(), path.display());
        Ok(entries)
    }
}

impl Default for WordsetLexicon {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

impl Lexicon for WordsetLexicon {
    fn define(&self, word: &str) -> Result<Option<Vec<WordMeaning>>> {
        let first = word
            .chars()
            .next()
            .ok_or_else(|| LexiconError::InvalidArgument("cannot define an empty word".into()))?;
        // Only the shard choice is case-folded; the headword match below is exact.
        let shard = shard_for_word_start(first);
        let mut entries = self.read_shard(shard)?;

        let meanings = match entries.remove(word) {
            Some(record) => {
                let entry: RawEntry =
                    serde_json::from_value(record).map_err(|source| LexiconError::MalformedEntry {
                        path: self.path_of(shard),
                        word: word.to_owned(),
                        source,
                    })?;
                Some(to_word_meanings(entry)?)
            }
            None => None,
        };
        trace!(
            "{word:?}: {}",
            meanings
                .as_ref()
                .map_or_else(|| "not found".to_owned(), |m| format!("{} meanings", m.len()))
        );
        Ok(meanings)
    }
}

/// A first letter whose lowercase form isn't a single character (e.g. `'İ'`)
/// can't name a letter shard.
fn shard_for_word_start(first: char) -> Shard {
    let mut lower = first.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(lower), None) => Shard::for_char(lower),
        _ => Shard::Misc,
    }
}

fn single_char(argument: &str) -> Result<char> {
    let mut chars = argument.chars();
    match (chars.next(), chars.next()) {
        (Some(first), None) => Ok(first),
        _ => Err(LexiconError::InvalidArgument(format!(
            "expected a single character, got {argument:?} with length {}",
            argument.chars().count()
        ))),
    }
}

fn to_word_meanings(entry: RawEntry) -> Result<Vec<WordMeaning>> {
    let RawEntry { word, meanings } = entry;
    meanings
        .into_iter()
        .enumerate()
        .map(|(index, meaning)| {
            let definition = meaning.definition.ok_or_else(|| LexiconError::MissingDefinition {
                word: word.clone(),
                index,
            })?;
            Ok(WordMeaning {
                word: word.clone(),
                definition,
                part_of_speech: meaning.speech_part,
                sentence: meaning.example,
                synonyms: meaning.synonyms,
            })
        })
        .collect()
}
