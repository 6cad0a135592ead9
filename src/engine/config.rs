// Configuration for the recite scorer and practice session
// Defaults reproduce the plain half-and-half blend

/// Scoring configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Weight of the word-overlap signal (default 0.5)
    pub overlap_weight: f64,

    /// Weight of the edit-distance signal (default 0.5)
    pub edit_weight: f64,

    /// Text placed before the expected word in feedback suggestions
    pub suggestion_prefix: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            overlap_weight: 0.5,
            edit_weight: 0.5,
            suggestion_prefix: "Expected word: ".to_string(),
        }
    }
}

impl ScoringConfig {
    /// Builder-style override of both blend weights.
    pub fn with_weights(mut self, overlap_weight: f64, edit_weight: f64) -> Self {
        self.overlap_weight = overlap_weight;
        self.edit_weight = edit_weight;
        self
    }

    /// Both weights finite and non-negative.
    pub fn has_valid_weights(&self) -> bool {
        [self.overlap_weight, self.edit_weight]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
    }
}

/// Practice session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeConfig {
    /// Sentences available before any library is loaded, as (text, translation)
    pub starter_sentences: Vec<(String, String)>,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            starter_sentences: vec![
                (
                    "Hello, how are you today?".to_string(),
                    "오늘 어떻게 지내세요?".to_string(),
                ),
                (
                    "I am learning English speaking.".to_string(),
                    "저는 영어 말하기를 배우고 있습니다.".to_string(),
                ),
            ],
        }
    }
}

/// Master configuration combining all recite settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub practice: PracticeConfig,
}
