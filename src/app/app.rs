use super::event::{AppEvent, Response};
use super::mode::AppMode;
use super::stats::{PracticeStats, SentenceRecord};
use crate::engine::config::Config;
use crate::engine::Scorer;
use crate::input::{self, LoadError, LoadedLibrary, SentencePair};
use tracing::{info, warn};

struct PracticeSentence {
    pair: SentencePair,
    record: SentenceRecord,
}

impl PracticeSentence {
    fn new(pair: SentencePair) -> Self {
        Self {
            pair,
            record: SentenceRecord::default(),
        }
    }
}

/// Practice session: sentence library, cursor, scorer and statistics.
pub struct App {
    pub mode: AppMode,
    library: Vec<PracticeSentence>,
    current_index: usize,
    scorer: Scorer,
    stats: PracticeStats,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let starters = config
            .practice
            .starter_sentences
            .into_iter()
            .map(|(text, translation)| SentencePair::new(text, translation))
            .collect();

        let mut app = Self {
            mode: AppMode::Empty,
            library: Vec::new(),
            current_index: 0,
            scorer: Scorer::new(config.scoring),
            stats: PracticeStats::default(),
        };
        app.replace_library(starters);
        app
    }

    pub fn current_sentence(&self) -> Option<&SentencePair> {
        self.library.get(self.current_index).map(|s| &s.pair)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn library_len(&self) -> usize {
        self.library.len()
    }

    pub fn stats(&self) -> PracticeStats {
        self.stats
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Response {
        match event {
            AppEvent::LoadFile(path) => self.apply_load(input::load(&path)),
            AppEvent::LoadClipboard => self.apply_load(input::clipboard::load()),
            AppEvent::ManualEntry(entry) => match input::parse_manual_entry(&entry) {
                Some(pair) => {
                    self.replace_library(vec![pair]);
                    self.show_sentence()
                }
                None => Response::Warning(
                    "Manual entries need both halves: text|translation".to_string(),
                ),
            },
            AppEvent::Attempt(candidate) => self.attempt(&candidate),
            AppEvent::NextSentence => {
                if self.library.is_empty() {
                    return self.no_library();
                }
                self.current_index = (self.current_index + 1) % self.library.len();
                self.show_sentence()
            }
            AppEvent::ShowSentence => self.show_sentence(),
            AppEvent::ShowStats => Response::Stats {
                record: self.library.get(self.current_index).map(|s| s.record),
                stats: self.stats,
            },
            AppEvent::Help => Response::Help,
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                Response::Quit
            }
            AppEvent::InvalidCommand(input) => {
                Response::Warning(format!("Unknown command: {}", input))
            }
        }
    }

    fn replace_library(&mut self, sentences: Vec<SentencePair>) {
        self.library = sentences.into_iter().map(PracticeSentence::new).collect();
        self.current_index = 0;
        self.mode = if self.library.is_empty() {
            AppMode::Empty
        } else {
            AppMode::Practicing
        };
    }

    fn apply_load(&mut self, result: Result<LoadedLibrary, LoadError>) -> Response {
        match result {
            Ok(loaded) => {
                info!(source = %loaded.source, "switching sentence library");
                self.replace_library(loaded.sentences);
                self.show_sentence()
            }
            Err(err) => {
                warn!(error = %err, "library load failed");
                Response::Warning(err.to_string())
            }
        }
    }

    fn attempt(&mut self, candidate: &str) -> Response {
        let Some(current) = self.library.get_mut(self.current_index) else {
            return self.no_library();
        };

        let report = self.scorer.score(&current.pair.text, candidate);
        current.record.record(report.similarity);
        self.stats.record(report.similarity);

        Response::Scored {
            report,
            record: current.record,
            stats: self.stats,
        }
    }

    fn show_sentence(&self) -> Response {
        match self.library.get(self.current_index) {
            Some(current) => Response::Sentence {
                index: self.current_index,
                total: self.library.len(),
                sentence: current.pair.clone(),
                record: current.record,
            },
            None => self.no_library(),
        }
    }

    fn no_library(&self) -> Response {
        Response::Warning("No sentences loaded. Use @file or +text|translation".to_string())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
