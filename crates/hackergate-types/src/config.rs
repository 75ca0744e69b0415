// ─────────────────────────────────────────────────────────────────────
// Hackergate — Runtime Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};

/// Upper bound for `pace_ms`.
pub const MAX_PACE_MS: u64 = 10_000;

/// How the advanced validation stage reads the slang pair `ain't no`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlangRule {
    /// `(ain't, no)` becomes `(am)`: both negations are consumed.
    #[default]
    Collapse,
    /// `(ain't, no)` becomes `(am, no)`: the verb is un-negated and the
    /// article keeps its negative effect.
    KeepArticle,
}

/// Runtime configuration for a Hackergate session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Delay after each console status line, in milliseconds.
    /// Default: 1000.
    pub pace_ms: u64,

    /// Whether the interactive picker keeps offering words that are
    /// already in the sentence.
    /// Default: false.
    pub allow_repeated_words: bool,

    /// Interpretation of `ain't no` in the advanced validation stage.
    /// Default: `collapse`.
    pub slang_rule: SlangRule,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            pace_ms: 1000,
            allow_repeated_words: false,
            slang_rule: SlangRule::Collapse,
        }
    }
}

impl GateConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> GateResult<()> {
        if self.pace_ms > MAX_PACE_MS {
            return Err(GateError::Config(format!(
                "pace_ms must be <= {MAX_PACE_MS}, got {}",
                self.pace_ms
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing keys take their defaults.
    pub fn from_json(json: &str) -> GateResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GateError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        log::debug!("loaded config: {config:?}");
        Ok(config)
    }
}
