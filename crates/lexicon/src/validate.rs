//! Shape checks for a Wordset dataset directory. Data problems are collected,
//! only an unreadable directory is an error.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde_json::Value;

use crate::error::{LexiconError, Result};
use crate::shard::{Shard, SHARD_EXTENSION};

/// Keys a meaning entry may carry. `id` and `labels` are allowed but unused.
pub const MEANING_KEYS: [&str; 6] = ["id", "def", "speech_part", "example", "synonyms", "labels"];

/// Keys every headword record must carry.
pub const REQUIRED_ENTRY_KEYS: [&str; 2] = ["word", "meanings"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingShard(Shard),
    Unreadable { file: PathBuf, reason: String },
    InvalidJson { file: PathBuf, reason: String },
    NotAnObject { file: PathBuf },
    EntryNotAnObject { file: PathBuf, headword: String },
    MissingKey { file: PathBuf, headword: String, key: &'static str },
    MalformedMeanings { file: PathBuf, headword: String },
    UnknownMeaningKey { file: PathBuf, headword: String, index: usize, key: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingShard(shard) => write!(f, "missing shard file {shard}"),
            Self::Unreadable { file, reason } => {
                write!(f, "{}: unreadable: {reason}", file.display())
            }
            Self::InvalidJson { file, reason } => {
                write!(f, "{}: invalid JSON: {reason}", file.display())
            }
            Self::NotAnObject { file } => {
                write!(f, "{}: top level is not an object", file.display())
            }
            Self::EntryNotAnObject { file, headword } => {
                write!(f, "{}: {headword:?} is not an object", file.display())
            }
            Self::MissingKey { file, headword, key } => {
                write!(f, "{}: {headword:?} has no {key:?} key", file.display())
            }
            Self::MalformedMeanings { file, headword } => {
                write!(f, "{}: {headword:?} has malformed meanings", file.display())
            }
            Self::UnknownMeaningKey { file, headword, index, key } => write!(
                f,
                "{}: meaning #{index} of {headword:?} has unexpected key {key:?}",
                file.display()
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    files_checked: usize,
    issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn files_checked(&self) -> usize {
        self.files_checked
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "{} shard files checked, no issues", self.files_checked);
        }
        writeln!(
            f,
            "{} shard files checked, {} issues:",
            self.files_checked,
            self.issues.len()
        )?;
        for issue in &self.issues {
            writeln!(f, "  {issue}")?;
        }
        Ok(())
    }
}

/// Checks that every declared shard exists and that every JSON file in
/// `data_dir` is shaped like a shard.
pub fn validate_dataset(data_dir: impl AsRef<Path>) -> Result<ValidationReport> {
    let data_dir = data_dir.as_ref();
    let files = shard_files(data_dir)?;
    let mut report = ValidationReport::default();

    let stems: BTreeSet<String> = files
        .iter()
        .filter_map(|file| file.file_stem()?.to_str().map(str::to_owned))
        .collect();
    report.issues.extend(
        Shard::all()
            .filter(|shard| !stems.contains(&shard.stem()))
            .map(Issue::MissingShard),
    );

    for file in files {
        debug!("validating {}", file.display());
        validate_file(&file, &mut report.issues);
        report.files_checked += 1;
    }

    if !report.is_valid() {
        warn!(
            "{} issues found in {}",
            report.issues.len(),
            data_dir.display()
        );
    }
    Ok(report)
}

fn shard_files(data_dir: &Path) -> Result<Vec<PathBuf>> {
    let io_error = |source| LexiconError::DatasetIo {
        path: data_dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for dir_entry in fs::read_dir(data_dir).map_err(io_error)? {
        let path = dir_entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SHARD_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn validate_file(file: &Path, issues: &mut Vec<Issue>) {
    let contents = match fs::read_to_string(file) {
        Ok(contents) => contents,
        Err(error) => {
            issues.push(Issue::Unreadable {
                file: file.to_path_buf(),
                reason: error.to_string(),
            });
            return;
        }
    };
    let top_level: Value = match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(error) => {
            issues.push(Issue::InvalidJson {
                file: file.to_path_buf(),
                reason: error.to_string(),
            });
            return;
        }
    };
    let Value::Object(entries) = top_level else {
        issues.push(Issue::NotAnObject {
            file: file.to_path_buf(),
        });
        return;
    };

    for (headword, entry) in &entries {
        validate_entry(file, headword, entry, issues);
    }
}

fn validate_entry(file: &Path, headword: &str, entry: &Value, issues: &mut Vec<Issue>) {
    let Value::Object(record) = entry else {
        issues.push(Issue::EntryNotAnObject {
            file: file.to_path_buf(),
            headword: headword.to_owned(),
        });
        return;
    };

    for key in REQUIRED_ENTRY_KEYS {
        if !record.contains_key(key) {
            issues.push(Issue::MissingKey {
                file: file.to_path_buf(),
                headword: headword.to_owned(),
                key,
            });
        }
    }

    let Some(meanings) = record.get("meanings") else {
        return;
    };
    let Value::Array(meanings) = meanings else {
        issues.push(Issue::MalformedMeanings {
            file: file.to_path_buf(),
            headword: headword.to_owned(),
        });
        return;
    };

    for (index, meaning) in meanings.iter().enumerate() {
        let Value::Object(meaning) = meaning else {
            issues.push(Issue::MalformedMeanings {
                file: file.to_path_buf(),
                headword: headword.to_owned(),
            });
            continue;
        };
        for key in meaning.keys() {
            if !MEANING_KEYS.contains(&key.as_str()) {
                issues.push(Issue::UnknownMeaningKey {
                    file: file.to_path_buf(),
                    headword: headword.to_owned(),
                    index,
                    key: key.clone(),
                });
            }
        }
    }
}
