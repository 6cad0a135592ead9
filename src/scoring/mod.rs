//! Text similarity and pronunciation feedback
//!
//! Compares a reference sentence with the text a speech recognizer produced
//! for the learner's attempt.
//!
//! ## Module Structure
//!
//! - **normalize.rs**: casefolding, punctuation stripping, tokenizing
//! - **similarity.rs**: word-overlap signal, blending, result bands
//! - **distance.rs**: character edit distance and its normalized signal
//! - **feedback.rs**: positional per-word diagnostics

pub mod distance;
pub mod feedback;
pub mod normalize;
pub mod similarity;

pub use distance::{edit_distance, edit_similarity};
pub use feedback::{positional_feedback, FeedbackEntry, FeedbackKind};
pub use normalize::{normalize, TokenSequence};
pub use similarity::{blend, word_overlap, SimilarityBand};

use crate::engine::config::ScoringConfig;
use serde::Serialize;
use tracing::debug;

/// Result of comparing one attempt against its reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Blended percentage in [0, 100].
    pub similarity: f64,
    /// Word-overlap signal in [0, 1].
    pub word_overlap: f64,
    /// Edit-distance signal in [0, 1].
    pub edit_similarity: f64,
    pub feedback: Vec<FeedbackEntry>,
}

impl ScoreReport {
    pub fn band(&self) -> SimilarityBand {
        SimilarityBand::from_similarity(self.similarity)
    }

    pub fn is_exact(&self) -> bool {
        self.similarity >= 100.0 && self.feedback.is_empty()
    }
}

/// Scores `candidate` against `reference` with the default configuration.
pub fn score(reference: &str, candidate: &str) -> ScoreReport {
    score_with_config(reference, candidate, &ScoringConfig::default())
}

pub fn score_with_config(reference: &str, candidate: &str, config: &ScoringConfig) -> ScoreReport {
    let reference = normalize(reference);
    let candidate = normalize(candidate);
    score_tokens(&reference, &candidate, config)
}

/// Scores two already normalized sequences.
///
/// An empty reference scores 0 with both signals at 0.
pub fn score_tokens(
    reference: &TokenSequence,
    candidate: &TokenSequence,
    config: &ScoringConfig,
) -> ScoreReport {
    let feedback = positional_feedback(reference, candidate, &config.suggestion_prefix);

    if reference.is_empty() {
        debug!("empty reference, similarity fixed at 0");
        return ScoreReport {
            similarity: 0.0,
            word_overlap: 0.0,
            edit_similarity: 0.0,
            feedback,
        };
    }

    let overlap = word_overlap(reference, candidate);
    let edit = edit_similarity(&reference.joined(), &candidate.joined());
    let similarity = blend(overlap, edit, config.overlap_weight, config.edit_weight);

    debug!(
        overlap,
        edit,
        similarity,
        mismatches = feedback.len(),
        "scored attempt"
    );

    ScoreReport {
        similarity,
        word_overlap: overlap,
        edit_similarity: edit,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_exact_match_is_100() {
        let report = score("I am learning English", "I am learning English");
        assert_eq!(report.similarity, 100.0);
        assert!(report.feedback.is_empty());
        assert!(report.is_exact());
    }

    #[test]
    fn test_score_ignores_case_and_punctuation() {
        let report = score("Hello, how are you today?", "hello how are you today?");
        assert_eq!(report.similarity, 100.0);
    }

    #[test]
    fn test_score_single_word_mismatch() {
        let report = score("I am learning English", "I am learning Engrish");

        assert_eq!(report.feedback.len(), 1);
        assert_eq!(report.feedback[0].word, "english");
        assert!(report.feedback[0]
            .suggestion
            .as_deref()
            .is_some_and(|s| s.contains("english")));
        assert!(report.similarity > 75.0 && report.similarity < 100.0);
        assert_eq!(report.word_overlap, 0.75);
    }

    #[test]
    fn test_score_empty_candidate() {
        let report = score("the cat sat", "");
        assert_eq!(report.similarity, 0.0);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_score_empty_reference_is_zero() {
        let report = score("", "something was said");
        assert_eq!(report.similarity, 0.0);
        assert_eq!(report.word_overlap, 0.0);
        assert_eq!(report.edit_similarity, 0.0);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_score_both_empty_is_zero() {
        let report = score("...", "   ");
        assert_eq!(report.similarity, 0.0);
    }

    #[test]
    fn test_score_reordered_words() {
        // Full word overlap, but the edit signal and feedback see the shuffle
        let report = score("the cat sat", "sat the cat");
        assert_eq!(report.word_overlap, 1.0);
        assert!(report.edit_similarity < 1.0);
        assert!(report.similarity < 100.0);
        assert_eq!(report.feedback.len(), 3);
    }

    #[test]
    fn test_score_tokens_honours_weights() {
        let config = ScoringConfig {
            overlap_weight: 1.0,
            edit_weight: 0.0,
            ..ScoringConfig::default()
        };
        let report = score_with_config("the cat sat", "sat the cat", &config);
        assert_eq!(report.similarity, 100.0);
    }

    #[test]
    fn test_score_combining_mark_token() {
        // 4 characters, one substitution: (0.5 + 0.75) / 2
        let report = score("a \u{301}b", "a xb");
        assert_eq!(report.edit_similarity, 0.75);
        assert_eq!(report.similarity, 62.5);
    }

    #[test]
    fn test_report_band() {
        let report = score("I am learning English", "I am learning Engrish");
        assert_eq!(report.band(), SimilarityBand::Great);
    }
}
