// ─────────────────────────────────────────────────────────────────────
// Hackergate — Core Pipeline
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Grammar checking, confidence scoring and the two-stage semantic
//! rewrite pipeline that decides whether a sentence such as
//! `I ain't no hacker` earns access.
//!
//! Pipeline: grammar → basic confidence → basic semantic enforcement →
//! advanced semantic validation → decision.
//!
//! # Invariants
//!
//! 1. **Rewrites are pure**: every stage takes a sentence and returns a
//!    new one (or a confidence). No `Word` or input `Sentence` is mutated.
//!
//! 2. **Grammar failure is terminal but recoverable**: a rejected
//!    sentence yields `RunOutcome::Rejected` and no decision. Nothing
//!    panics.
//!
//! 3. **Exact comparisons are sound**: every confidence effect is 0, ±1
//!    or a power-of-two fraction, so products are exact in `f64` and
//!    `== -1.0` is a reliable trigger.
//!
//! 4. **Reporting is injected**: status lines go to a `Reporter`; the
//!    core never writes to the console and never sleeps.

pub mod confidence;
pub mod engine;
pub mod grammar;
pub mod reporter;
pub mod semantics;

pub use confidence::{basic_confidence, friendly_confidence};
pub use engine::{run_system, DecisionEngine};
pub use grammar::check_grammar;
pub use reporter::{CollectingReporter, ExternalReporter, NullReporter, Reporter};
pub use semantics::{
    advanced_semantic_validation, basic_semantic_enforcement, collapse_slang, insert_negations,
    SlangRewrite,
};
