use serde::Serialize;
use std::fmt;

/// Characters stripped from sentences before comparison.
const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')',
];

/// Ordered, lowercase, punctuation-stripped words of a sentence.
///
/// Never contains an empty token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|token| token == word)
    }

    /// Rejoins the tokens with single spaces.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

fn is_stripped(c: char) -> bool {
    STRIPPED_PUNCTUATION.contains(&c)
}

/// Canonicalizes a raw sentence into comparable tokens.
///
/// Lowercases, drops the punctuation set above, collapses whitespace and
/// splits. Empty or whitespace-only input gives an empty sequence.
pub fn normalize(sentence: &str) -> TokenSequence {
    let cleaned: String = sentence
        .to_lowercase()
        .chars()
        .filter(|&c| !is_stripped(c))
        .collect();

    TokenSequence(cleaned.split_whitespace().map(str::to_string).collect())
}
