use std::path::{Path, PathBuf};

/// Pattern used when no include pattern is given: admits every file.
pub const MATCH_ALL: &str = "*";

/// Where the primary output goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` and the empty string mean standard output, anything else is a file path.
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "-" => OutputTarget::Stdout,
            path => OutputTarget::File(PathBuf::from(path)),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PromptOptions {
    pub root: PathBuf,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub output: OutputTarget,
    pub estimate_tokens: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include_patterns: vec![MATCH_ALL.to_string()],
            exclude_patterns: Vec::new(),
            output: OutputTarget::Stdout,
            estimate_tokens: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct PromptBuilder {
    options: PromptOptions,
}

impl PromptBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: PromptOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Replaces the default [`MATCH_ALL`] include list. An empty list admits nothing.
    pub fn include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.include_patterns = patterns;
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn output(mut self, target: OutputTarget) -> Self {
        self.options.output = target;
        self
    }
    pub fn estimate_tokens(mut self, yes: bool) -> Self {
        self.options.estimate_tokens = yes;
        self
    }
    pub fn build(self) -> PromptOptions {
        self.options
    }
}

/// Splits a comma-separated pattern list, trimming whitespace and dropping empty items.
pub fn split_patterns(patterns: &str) -> Vec<String> {
    patterns
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
