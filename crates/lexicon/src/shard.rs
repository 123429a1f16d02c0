use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Extension of every shard file.
pub const SHARD_EXTENSION: &str = "json";

const MISC_STEM: &str = "misc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shard {
    Letter(char),
    Misc,
}

impl Shard {
    /// No case folding: `'T'` belongs to [`Shard::Misc`].
    pub fn for_char(first: char) -> Self {
        if first.is_ascii_lowercase() {
            Self::Letter(first)
        } else {
            Self::Misc
        }
    }

    pub fn all() -> impl Iterator<Item = Shard> {
        ('a'..='z').map(Shard::Letter).chain(std::iter::once(Shard::Misc))
    }

    pub fn stem(&self) -> String {
        match self {
            Self::Letter(letter) => letter.to_string(),
            Self::Misc => MISC_STEM.to_owned(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{SHARD_EXTENSION}", self.stem())
    }
}

impl fmt::Display for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// Headword records keyed exactly as stored, each left unparsed until looked up.
pub type RawShard = HashMap<String, Value>;

#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub word: String,
    pub meanings: Vec<RawMeaning>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMeaning {
    #[serde(rename = "def")]
    pub definition: Option<String>,
    pub speech_part: Option<String>,
    pub example: Option<String>,
    pub synonyms: Option<Vec<String>>,
}
