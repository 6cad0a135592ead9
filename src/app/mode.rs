#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// No sentences to practise
    Empty,
    Practicing,
    Quit,
}
