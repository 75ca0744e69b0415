// ─────────────────────────────────────────────────────────────────────
// Hackergate — Vocabulary
// ─────────────────────────────────────────────────────────────────────
//! The closed eight-word vocabulary and the `Sentence` built from it.
//!
//! Every word carries two grammatical flags (verb, article) and a
//! signed confidence multiplier. No word exists outside this set.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// One entry of the fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Word {
    Definitely,
    Probably,
    Maybe,
    Not,
    No,
    #[serde(rename = "ain't")]
    Aint,
    Am,
    A,
}

impl Word {
    /// The whole vocabulary, in menu order.
    pub const ALL: [Word; 8] = [
        Word::Definitely,
        Word::Probably,
        Word::Maybe,
        Word::Not,
        Word::No,
        Word::Aint,
        Word::Am,
        Word::A,
    ];

    /// Display text, unique per entry.
    pub const fn text(self) -> &'static str {
        match self {
            Word::Definitely => "definitely",
            Word::Probably => "probably",
            Word::Maybe => "maybe",
            Word::Not => "not",
            Word::No => "no",
            Word::Aint => "ain't",
            Word::Am => "am",
            Word::A => "a",
        }
    }

    pub const fn is_verb(self) -> bool {
        matches!(self, Word::Aint | Word::Am)
    }

    pub const fn is_article(self) -> bool {
        matches!(self, Word::No | Word::A)
    }

    /// Signed multiplier in [-1, 1] applied to the running confidence.
    pub const fn confidence_effect(self) -> f64 {
        match self {
            Word::Definitely | Word::Am | Word::A => 1.0,
            Word::Probably => 0.5,
            Word::Maybe => 0.25,
            Word::Not | Word::No | Word::Aint => -1.0,
        }
    }

    /// Exact lookup by display text.
    pub fn from_text(text: &str) -> Option<Word> {
        Word::ALL.into_iter().find(|w| w.text() == text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Lenient parse for user input: case-insensitive, and `aint`
/// is accepted for `ain't`.
impl FromStr for Word {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let normalized = match lowered.as_str() {
            "aint" | "ain’t" => "ain't",
            other => other,
        };
        Word::from_text(normalized).ok_or_else(|| GateError::UnknownWord(s.to_string()))
    }
}

/// Ordered sequence of words under judgment.
///
/// Repeats are allowed; grammatical validity is checked downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentence(Vec<Word>);

impl Sentence {
    pub fn new(words: Vec<Word>) -> Self {
        Self(words)
    }

    pub fn push(&mut self, word: Word) {
        self.0.push(word);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn into_words(self) -> Vec<Word> {
        self.0
    }

    /// `I <words...> hacker`, single-spaced.
    pub fn friendly(&self) -> String {
        std::iter::once("I")
            .chain(self.0.iter().map(|w| w.text()))
            .chain(std::iter::once("hacker"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Deref for Sentence {
    type Target = [Word];

    fn deref(&self) -> &[Word] {
        &self.0
    }
}

impl From<Vec<Word>> for Sentence {
    fn from(words: Vec<Word>) -> Self {
        Self(words)
    }
}

impl<const N: usize> From<[Word; N]> for Sentence {
    fn from(words: [Word; N]) -> Self {
        Self(words.to_vec())
    }
}

impl FromIterator<Word> for Sentence {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.friendly())
    }
}
