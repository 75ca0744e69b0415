// ─────────────────────────────────────────────────────────────────────
// Hackergate — Shared Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Vocabulary, configuration, run outcomes and the error hierarchy
//! shared by the Hackergate core pipeline and its front ends.

pub mod config;
pub mod error;
pub mod verdict;
pub mod word;

pub use config::{GateConfig, SlangRule};
pub use error::{GateError, GateResult, GrammarError};
pub use verdict::{AccessDecision, RunOutcome, Verdict};
pub use word::{Sentence, Word};
