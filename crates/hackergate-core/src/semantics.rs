// ─────────────────────────────────────────────────────────────────────
// Hackergate — Semantic Transform Pipeline
// ─────────────────────────────────────────────────────────────────────
//! Two rewrite passes run after the grammar check.
//!
//! - **Basic semantic enforcement**: a sentence scoring exactly -1 is
//!   treated as a rejected claim and corrected by inserting `not` after
//!   every verb.
//! - **Advanced semantic validation**: the slang pair `ain't no` is
//!   reinterpreted before the final confidence is computed. Only the
//!   last emitted word is inspected (single lookback).

use hackergate_types::{Sentence, SlangRule, Word};

use crate::confidence::{basic_confidence, friendly_confidence};
use crate::reporter::Reporter;

const SLANG_NOTICE: &str =
    "Advanced semantic validation: Slang double negative detected; interpreting as negative";

/// Copy `sentence`, inserting `not` immediately after every verb.
pub fn insert_negations(sentence: &[Word]) -> Sentence {
    let mut corrected = Vec::with_capacity(sentence.len() + 1);
    for &word in sentence {
        corrected.push(word);
        if word.is_verb() {
            corrected.push(Word::Not);
        }
    }
    Sentence::new(corrected)
}

/// Stage A: negate a sentence whose confidence is exactly -1.
///
/// Reports the pre-transform judgment, then the correction if one was
/// made. Returns the input unchanged otherwise.
pub fn basic_semantic_enforcement(sentence: &Sentence, reporter: &dyn Reporter) -> Sentence {
    let confidence = basic_confidence(sentence);
    reporter.report(&format!(
        "Basic semantic enforcement: {}",
        friendly_confidence(confidence)
    ));

    if confidence != -1.0 {
        return sentence.clone();
    }

    let corrected = insert_negations(sentence);
    log::info!("basic enforcement corrected {sentence} -> {corrected}");
    reporter.report("Basic semantic enforcement: Rejecting claim; correcting sentence to:");
    reporter.report(&format!("  {}", corrected.friendly()));
    corrected
}

/// Output of the slang rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlangRewrite {
    pub sentence: Sentence,
    /// Number of `ain't no` pairs rewritten.
    pub collapsed: usize,
}

fn rewrite_slang(sentence: &[Word], rule: SlangRule, mut on_collapse: impl FnMut()) -> SlangRewrite {
    let mut out: Vec<Word> = Vec::with_capacity(sentence.len());
    let mut collapsed = 0;

    for &word in sentence {
        if word == Word::No && out.last() == Some(&Word::Aint) {
            out.pop();
            out.push(Word::Am);
            if rule == SlangRule::KeepArticle {
                out.push(Word::No);
            }
            collapsed += 1;
            on_collapse();
            continue;
        }
        out.push(word);
    }

    SlangRewrite {
        sentence: Sentence::new(out),
        collapsed,
    }
}

/// Pure form of the advanced validation rewrite.
pub fn collapse_slang(sentence: &[Word], rule: SlangRule) -> SlangRewrite {
    rewrite_slang(sentence, rule, || {})
}

/// Rewrite under `rule`, reporting one notice per rewritten pair.
pub(crate) fn validate_slang(
    sentence: &[Word],
    rule: SlangRule,
    reporter: &dyn Reporter,
) -> SlangRewrite {
    let rewrite = rewrite_slang(sentence, rule, || reporter.report(SLANG_NOTICE));
    if rewrite.collapsed > 0 {
        log::info!(
            "slang rewrite ({rule:?}): {} -> {}",
            Sentence::from(sentence.to_vec()),
            rewrite.sentence
        );
    }
    rewrite
}

/// Stage B: collapse `ain't no` into `am` and return the confidence of
/// the rewritten sentence.
pub fn advanced_semantic_validation(sentence: &[Word], reporter: &dyn Reporter) -> f64 {
    let rewrite = validate_slang(sentence, SlangRule::Collapse, reporter);
    basic_confidence(&rewrite.sentence)
}
