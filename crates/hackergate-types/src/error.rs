// ─────────────────────────────────────────────────────────────────────
// Hackergate — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural defect found by the grammar checker.
///
/// Variants are listed in the order the rules are evaluated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammarError {
    #[error("Sentence must contain exactly one verb")]
    VerbCount,

    #[error("Sentence must end with an article")]
    MissingFinalArticle,

    #[error("Sentence must contain exactly one article")]
    ArticleCount,
}

/// Root error type for everything outside the pure pipeline.
#[derive(Error, Debug)]
pub enum GateError {
    /// Sentence rejected by the grammar checker.
    #[error("grammar error: {0}")]
    Grammar(#[from] GrammarError),

    /// Text that is not one of the eight vocabulary words.
    #[error("unknown word: {0:?}")]
    UnknownWord(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Sentence builder I/O failed.
    #[error("input error: {0}")]
    Input(String),
}

pub type GateResult<T> = Result<T, GateError>;
