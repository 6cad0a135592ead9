use super::SentencePair;
use tracing::warn;

const SEPARATOR: char = '|';

/// Splits a `text|translation` line. Both halves must be non-empty.
fn split_pair(line: &str) -> Option<SentencePair> {
    let (text, translation) = line.split_once(SEPARATOR)?;
    let (text, translation) = (text.trim(), translation.trim());
    if text.is_empty() || translation.is_empty() {
        return None;
    }
    Some(SentencePair::new(text, translation))
}

/// Parses a sentence library in either supported layout.
///
/// - Delimited: any line contains `|`, every line is `text|translation`.
///   Lines missing either half are skipped.
/// - Paired lines: otherwise non-empty lines alternate text, translation.
///   A dangling last line is dropped.
pub fn parse_library(content: &str) -> Vec<SentencePair> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.iter().any(|line| line.contains(SEPARATOR)) {
        parse_delimited(&lines)
    } else {
        parse_paired(&lines)
    }
}

fn parse_delimited(lines: &[&str]) -> Vec<SentencePair> {
    let mut sentences = Vec::with_capacity(lines.len());
    for (number, line) in lines.iter().enumerate() {
        match split_pair(line) {
            Some(pair) => sentences.push(pair),
            None => warn!(line = number + 1, "skipping malformed library line"),
        }
    }
    sentences
}

fn parse_paired(lines: &[&str]) -> Vec<SentencePair> {
    let chunks = lines.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        warn!("dropping unpaired final library line");
    }
    chunks
        .map(|pair| SentencePair::new(pair[0], pair[1]))
        .collect()
}

/// Parses a single manually typed `text|translation` entry.
pub fn parse_manual_entry(input: &str) -> Option<SentencePair> {
    split_pair(input.trim())
}
