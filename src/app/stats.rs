use serde::Serialize;

/// Per-sentence practice history.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentenceRecord {
    pub practiced: u32,
    pub best_similarity: f64,
}

impl SentenceRecord {
    pub fn record(&mut self, similarity: f64) {
        self.practiced += 1;
        self.best_similarity = self.best_similarity.max(similarity);
    }
}

/// Totals across every attempt in the session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PracticeStats {
    pub total_practices: u32,
    pub average_similarity: f64,
}

impl PracticeStats {
    /// Folds one attempt into the running average.
    pub fn record(&mut self, similarity: f64) {
        self.total_practices += 1;
        let n = self.total_practices as f64;
        self.average_similarity = (self.average_similarity * (n - 1.0) + similarity) / n;
    }
}
