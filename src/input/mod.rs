use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("No sentence pairs found in {0}")]
    NoSentences(String),
}

/// One library entry: the sentence to practise and its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePair {
    pub text: String,
    pub translation: String,
}

impl SentencePair {
    pub fn new(text: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            translation: translation.into(),
        }
    }
}

pub struct LoadedLibrary {
    pub sentences: Vec<SentencePair>,
    pub source: String,
}

impl LoadedLibrary {
    /// Parses raw content, rejecting content with no usable pairs.
    pub fn from_content(content: &str, source: String) -> Result<Self, LoadError> {
        let sentences = parse::parse_library(content);
        if sentences.is_empty() {
            return Err(LoadError::NoSentences(source));
        }
        info!(count = sentences.len(), %source, "loaded sentence library");
        Ok(Self { sentences, source })
    }
}

/// Loads a sentence library, picking the reader from the file extension.
pub fn load(path: &str) -> Result<LoadedLibrary, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        None | Some("txt") | Some("text") => text::load(path),
        Some("pdf") => pdf::load(path),
        Some(other) => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

pub mod clipboard;
pub mod parse;
pub mod pdf;
pub mod text;

pub use parse::{parse_library, parse_manual_entry};
