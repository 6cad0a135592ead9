use super::normalize::TokenSequence;
use serde::Serialize;
use std::fmt;

/// Diagnostic attached to a mismatched reference word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Mispronounced,
}

impl FeedbackKind {
    pub fn message(&self) -> &'static str {
        match self {
            FeedbackKind::Mispronounced => "Pronunciation is not accurate.",
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One word-level diagnostic, in reference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub word: String,
    pub feedback: FeedbackKind,
    pub suggestion: Option<String>,
}

/// Compares reference and candidate position by position.
///
/// Stops at the end of the shorter sequence, so the result never has more
/// than `min(reference.len(), candidate.len())` entries. Unlike the overlap
/// signal this is order sensitive.
pub fn positional_feedback(
    reference: &TokenSequence,
    candidate: &TokenSequence,
    suggestion_prefix: &str,
) -> Vec<FeedbackEntry> {
    reference
        .tokens()
        .iter()
        .zip(candidate.tokens())
        .filter(|(expected, heard)| expected != heard)
        .map(|(expected, _)| FeedbackEntry {
            word: expected.clone(),
            feedback: FeedbackKind::Mispronounced,
            suggestion: Some(format!("{}{}", suggestion_prefix, expected)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::normalize;

    const PREFIX: &str = "Expected word: ";

    #[test]
    fn test_feedback_empty_on_exact_match() {
        let tokens = normalize("I am learning English");
        assert!(positional_feedback(&tokens, &tokens, PREFIX).is_empty());
    }

    #[test]
    fn test_feedback_single_mismatch() {
        let reference = normalize("I am learning English");
        let candidate = normalize("I am learning Engrish");
        let feedback = positional_feedback(&reference, &candidate, PREFIX);

        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].word, "english");
        assert_eq!(feedback[0].feedback, FeedbackKind::Mispronounced);
        assert_eq!(
            feedback[0].suggestion.as_deref(),
            Some("Expected word: english")
        );
    }

    #[test]
    fn test_feedback_stops_at_candidate_length() {
        let reference = normalize("one two three four");
        let candidate = normalize("one too");
        let feedback = positional_feedback(&reference, &candidate, PREFIX);

        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].word, "two");
    }

    #[test]
    fn test_feedback_ignores_extra_candidate_words() {
        let reference = normalize("hello");
        let candidate = normalize("hello there friend");
        assert!(positional_feedback(&reference, &candidate, PREFIX).is_empty());
    }

    #[test]
    fn test_feedback_is_positional_not_set_based() {
        // Same words, shifted by one: every position mismatches
        let reference = normalize("the cat sat");
        let candidate = normalize("cat sat the");
        let feedback = positional_feedback(&reference, &candidate, PREFIX);

        let words: Vec<&str> = feedback.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(words, ["the", "cat", "sat"]);
    }

    #[test]
    fn test_feedback_empty_candidate() {
        let reference = normalize("the cat sat");
        let candidate = normalize("");
        assert!(positional_feedback(&reference, &candidate, PREFIX).is_empty());
    }

    #[test]
    fn test_feedback_kind_display() {
        assert_eq!(
            FeedbackKind::Mispronounced.to_string(),
            "Pronunciation is not accurate."
        );
    }
}
