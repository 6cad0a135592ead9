use super::stats::{PracticeStats, SentenceRecord};
use crate::input::SentencePair;
use crate::scoring::ScoreReport;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    ManualEntry(String),
    /// Recognized text for the learner's attempt at the current sentence
    Attempt(String),
    NextSentence,
    ShowSentence,
    ShowStats,
    Quit,
    Help,
    InvalidCommand(String),
}

/// What the app produced in answer to an event
#[derive(Debug, PartialEq, Clone)]
pub enum Response {
    Sentence {
        index: usize,
        total: usize,
        sentence: SentencePair,
        record: SentenceRecord,
    },
    Scored {
        report: ScoreReport,
        record: SentenceRecord,
        stats: PracticeStats,
    },
    Stats {
        record: Option<SentenceRecord>,
        stats: PracticeStats,
    },
    Help,
    Warning(String),
    Quit,
}
