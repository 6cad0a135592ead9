pub mod config;
pub mod scorer;

pub use config::{Config, PracticeConfig, ScoringConfig};
pub use scorer::Scorer;

// Re-export scoring items so callers can reach everything from the engine
pub use crate::scoring::{normalize, score, FeedbackEntry, ScoreReport, TokenSequence};
