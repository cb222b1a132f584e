//! Candidate words and where they come from.
//!
//! A word list is plain text with one word per line. Lines are trimmed,
//! blank lines are skipped and every word is uppercased on load.

use super::error::WordSourceError;
use rand::{Rng, RngExt};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse word list text. Returns `None` if no line holds a word.
    pub fn parse(text: &str) -> Option<Self> {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_uppercase)
            .collect();
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    pub fn load(path: &Path) -> Result<Self, WordSourceError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| WordSourceError::from_io(path.to_path_buf(), e))?;
        Self::parse(&text).ok_or_else(|| WordSourceError::Empty {
            path: path.to_path_buf(),
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pick one word uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

/// Anything that can hand out a fresh word list for a new round.
pub trait WordSource {
    fn load(&self) -> Result<WordList, WordSourceError>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

/// Reads the list from disk on every call so edits show up on the next round.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    fn load(&self) -> Result<WordList, WordSourceError> {
        WordList::load(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory word list.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StaticWordSource {
    words: Vec<String>,
}

#[cfg(test)]
impl StaticWordSource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl WordSource for StaticWordSource {
    fn load(&self) -> Result<WordList, WordSourceError> {
        WordList::parse(&self.words.join("\n")).ok_or_else(|| WordSourceError::Empty {
            path: PathBuf::from("<memory>"),
        })
    }

    fn describe(&self) -> String {
        format!("<memory: {} words>", self.words.len())
    }
}
