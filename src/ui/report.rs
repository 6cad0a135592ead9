use super::command::HELP_TEXT;
use super::theme::Theme;
use crate::app::{PracticeStats, Response, SentenceRecord};
use crate::scoring::ScoreReport;
use crossterm::style::{style, Color, Stylize};
use unicode_width::UnicodeWidthStr;

/// Pads `text` with spaces to `width` terminal columns.
fn pad_to_width(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(current)));
    padded
}

/// Turns app responses into terminal text.
pub struct ReportRenderer {
    theme: Theme,
    color: bool,
}

impl ReportRenderer {
    pub fn new(color: bool) -> Self {
        Self {
            theme: Theme::default(),
            color,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn render(&self, response: &Response) -> String {
        match response {
            Response::Sentence {
                index,
                total,
                sentence,
                record,
            } => {
                let mut out = format!(
                    "{}\n{}\n{}\n",
                    self.paint(&format!("[{}/{}]", index + 1, total), self.theme.dimmed),
                    self.paint(&sentence.text, self.theme.accent),
                    self.paint(&sentence.translation, self.theme.text)
                );
                out.push_str(&self.render_record(record));
                out
            }
            Response::Scored {
                report,
                record,
                stats,
            } => {
                let mut out = self.render_report(report);
                out.push_str(&self.render_record(record));
                out.push_str(&self.render_stats(stats));
                out
            }
            Response::Stats { record, stats } => {
                let mut out = String::new();
                if let Some(record) = record {
                    out.push_str(&self.render_record(record));
                }
                out.push_str(&self.render_stats(stats));
                out
            }
            Response::Help => format!("{}\n", HELP_TEXT),
            Response::Warning(message) => {
                format!("{}\n", self.paint(message, self.theme.warning))
            }
            Response::Quit => String::new(),
        }
    }

    pub fn render_report(&self, report: &ScoreReport) -> String {
        let band_color = self.theme.band(report.band());
        let mut out = format!(
            "Similarity: {}\n",
            self.paint(&format!("{:.2}%", report.similarity), band_color)
        );

        if report.feedback.is_empty() {
            return out;
        }

        let width = report
            .feedback
            .iter()
            .map(|entry| UnicodeWidthStr::width(entry.word.as_str()))
            .max()
            .unwrap_or(0);

        out.push_str("Pronunciation feedback:\n");
        for entry in &report.feedback {
            out.push_str(&format!(
                "  {}  {}",
                self.paint(&pad_to_width(&entry.word, width), self.theme.accent),
                entry.feedback
            ));
            if let Some(suggestion) = &entry.suggestion {
                out.push(' ');
                out.push_str(&self.paint(suggestion, self.theme.dimmed));
            }
            out.push('\n');
        }
        out
    }

    fn render_record(&self, record: &SentenceRecord) -> String {
        format!(
            "Practiced {} time(s), best {:.2}%\n",
            record.practiced, record.best_similarity
        )
    }

    fn render_stats(&self, stats: &PracticeStats) -> String {
        format!(
            "Total practices: {}, average similarity {:.2}%\n",
            stats.total_practices, stats.average_similarity
        )
    }
}
