// ─────────────────────────────────────────────────────────────────────
// Hackergate — Run Outcome Types
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GrammarError;
use crate::word::Sentence;

/// Final gate decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    Granted,
    Denied,
}

impl AccessDecision {
    /// Only an exact confidence of -1 grants access.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence == -1.0 {
            AccessDecision::Granted
        } else {
            AccessDecision::Denied
        }
    }

    pub fn is_granted(self) -> bool {
        self == AccessDecision::Granted
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessDecision::Granted => f.write_str("Access granted"),
            AccessDecision::Denied => f.write_str("Access denied"),
        }
    }
}

/// Trace of a sentence that passed grammar and reached a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Sentence as supplied by the builder.
    pub input: Sentence,
    /// Confidence of the input before any rewrite.
    pub initial_confidence: f64,
    /// True if basic enforcement inserted negations.
    pub corrected: bool,
    /// Output of basic enforcement.
    pub enforced: Sentence,
    /// Output of the slang rewrite in advanced validation.
    pub validated: Sentence,
    /// Number of `ain't no` pairs rewritten.
    pub slang_collapses: usize,
    /// Confidence of `validated`.
    pub final_confidence: f64,
    pub decision: AccessDecision,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Grammar check failed; no decision was made.
    Rejected { input: Sentence, error: GrammarError },
    Decided(Verdict),
}

impl RunOutcome {
    pub fn decision(&self) -> Option<AccessDecision> {
        match self {
            RunOutcome::Rejected { .. } => None,
            RunOutcome::Decided(verdict) => Some(verdict.decision),
        }
    }

    pub fn grammar_error(&self) -> Option<GrammarError> {
        match self {
            RunOutcome::Rejected { error, .. } => Some(*error),
            RunOutcome::Decided(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;

    #[test]
    fn test_decision_exact_minus_one() {
        assert_eq!(AccessDecision::from_confidence(-1.0), AccessDecision::Granted);
        assert_eq!(AccessDecision::from_confidence(-0.5), AccessDecision::Denied);
        assert_eq!(AccessDecision::from_confidence(1.0), AccessDecision::Denied);
    }

    #[test]
    fn test_decision_display() {
        assert_eq!(AccessDecision::Granted.to_string(), "Access granted");
        assert_eq!(AccessDecision::Denied.to_string(), "Access denied");
    }

    #[test]
    fn test_rejected_outcome_json() {
        let outcome = RunOutcome::Rejected {
            input: Sentence::from([Word::Am]),
            error: GrammarError::MissingFinalArticle,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "rejected");
        assert_eq!(json["error"], "missing_final_article");
        assert_eq!(outcome.decision(), None);
        assert_eq!(outcome.grammar_error(), Some(GrammarError::MissingFinalArticle));
    }

    #[test]
    fn test_decided_outcome_json() {
        let outcome = RunOutcome::Decided(Verdict {
            input: Sentence::from([Word::Am, Word::A]),
            initial_confidence: 1.0,
            corrected: false,
            enforced: Sentence::from([Word::Am, Word::A]),
            validated: Sentence::from([Word::Am, Word::A]),
            slang_collapses: 0,
            final_confidence: 1.0,
            decision: AccessDecision::Denied,
        });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "decided");
        assert_eq!(json["decision"], "denied");
        assert_eq!(json["input"][0], "am");
        assert_eq!(outcome.decision(), Some(AccessDecision::Denied));
    }
}
