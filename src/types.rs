use std::path::PathBuf;

/// A file that passed pattern filtering and was classified as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    /// Path relative to the scan root, always `/` separated.
    pub relative: String,
    /// Path as produced by the walk, used to read the content.
    pub path: PathBuf,
}

/// What a completed run wrote.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Relative paths of the emitted files, in output order.
    pub files: Vec<String>,
    /// Relative paths that matched the patterns but were skipped as binary.
    pub skipped_binary: Vec<String>,
    /// Token count of the emitted text, when estimation was requested.
    pub estimated_tokens: Option<usize>,
}
