use super::normalize::TokenSequence;
use serde::Serialize;
use std::collections::HashSet;

/// Fraction of reference tokens found anywhere in the candidate.
///
/// Position and multiplicity are ignored. An empty reference gives 0.
pub fn word_overlap(reference: &TokenSequence, candidate: &TokenSequence) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }

    let heard: HashSet<&str> = candidate.tokens().iter().map(String::as_str).collect();
    let matched = reference
        .tokens()
        .iter()
        .filter(|token| heard.contains(token.as_str()))
        .count();

    matched as f64 / reference.len() as f64
}

/// Weighted mean of the two signals as a percentage clamped to [0, 100].
///
/// Non-positive or non-finite weight sums fall back to an equal split.
pub fn blend(overlap: f64, edit: f64, overlap_weight: f64, edit_weight: f64) -> f64 {
    let total = overlap_weight + edit_weight;
    let fraction = if total > 0.0 && total.is_finite() {
        (overlap * overlap_weight + edit * edit_weight) / total
    } else {
        (overlap + edit) / 2.0
    };

    (fraction * 100.0).clamp(0.0, 100.0)
}

/// Coarse grade of a similarity percentage, used for colouring results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityBand {
    Poor,
    Weak,
    Fair,
    Good,
    Great,
    Excellent,
}

impl SimilarityBand {
    pub fn from_similarity(similarity: f64) -> Self {
        match similarity {
            s if s <= 50.0 => SimilarityBand::Poor,
            s if s <= 60.0 => SimilarityBand::Weak,
            s if s <= 70.0 => SimilarityBand::Fair,
            s if s <= 80.0 => SimilarityBand::Good,
            s if s <= 90.0 => SimilarityBand::Great,
            _ => SimilarityBand::Excellent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SimilarityBand::Poor => "0-50",
            SimilarityBand::Weak => "51-60",
            SimilarityBand::Fair => "61-70",
            SimilarityBand::Good => "71-80",
            SimilarityBand::Great => "81-90",
            SimilarityBand::Excellent => "91-100",
        }
    }
}
