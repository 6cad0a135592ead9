use super::config::ScoringConfig;
use crate::scoring::{self, ScoreReport, TokenSequence};

/// Stateless scoring entry point carrying its configuration.
///
/// Holds no mutable state, so one instance can be shared freely between
/// threads and independent comparisons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn normalize(&self, sentence: &str) -> TokenSequence {
        scoring::normalize(sentence)
    }

    pub fn score(&self, reference: &str, candidate: &str) -> ScoreReport {
        scoring::score_with_config(reference, candidate, &self.config)
    }
}
