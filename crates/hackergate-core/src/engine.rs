// ─────────────────────────────────────────────────────────────────────
// Hackergate — Decision Engine
// ─────────────────────────────────────────────────────────────────────
//! Orchestrates grammar, confidence and both semantic stages into an
//! access decision.

use std::sync::Arc;

use hackergate_types::{AccessDecision, GateConfig, RunOutcome, Sentence, Verdict};

use crate::confidence::{basic_confidence, friendly_confidence};
use crate::grammar::check_grammar;
use crate::reporter::Reporter;
use crate::semantics::{basic_semantic_enforcement, validate_slang};

/// Runs sentences through the full pipeline, reporting as it goes.
pub struct DecisionEngine {
    config: GateConfig,
    reporter: Arc<dyn Reporter>,
}

impl DecisionEngine {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self::with_config(GateConfig::default(), reporter)
    }

    pub fn with_config(config: GateConfig, reporter: Arc<dyn Reporter>) -> Self {
        Self { config, reporter }
    }

    /// Judge one sentence.
    ///
    /// A grammar failure is reported and returned as
    /// `RunOutcome::Rejected`; no decision is made for that sentence.
    pub fn run(&self, sentence: &Sentence) -> RunOutcome {
        let reporter = self.reporter.as_ref();
        reporter.report(&format!("Input: {}", sentence.friendly()));

        if let Err(error) = check_grammar(sentence) {
            log::warn!("grammar rejected {sentence}: {error}");
            reporter.report(&format!("Grammar check: {error}"));
            return RunOutcome::Rejected {
                input: sentence.clone(),
                error,
            };
        }
        reporter.report("Grammar check: OK");

        let initial_confidence = basic_confidence(sentence);
        log::debug!("initial confidence {initial_confidence}");

        let enforced = basic_semantic_enforcement(sentence, reporter);
        let rewrite = validate_slang(&enforced, self.config.slang_rule, reporter);
        let final_confidence = basic_confidence(&rewrite.sentence);
        reporter.report(&format!(
            "Advanced semantic validation: {}",
            friendly_confidence(final_confidence)
        ));

        let decision = AccessDecision::from_confidence(final_confidence);
        log::info!("{sentence}: final confidence {final_confidence} -> {decision}");
        reporter.report(&decision.to_string());

        RunOutcome::Decided(Verdict {
            input: sentence.clone(),
            initial_confidence,
            corrected: initial_confidence == -1.0,
            enforced,
            validated: rewrite.sentence,
            slang_collapses: rewrite.collapsed,
            final_confidence,
            decision,
        })
    }

    /// Read-only access to config.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }
}

/// Judge `sentence` with the default configuration.
pub fn run_system(sentence: &Sentence, reporter: Arc<dyn Reporter>) -> RunOutcome {
    DecisionEngine::new(reporter).run(sentence)
}
