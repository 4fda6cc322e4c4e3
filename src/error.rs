use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which side of the filter a glob pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Include,
    Exclude,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Include => f.write_str("include"),
            PatternKind::Exclude => f.write_str("exclude"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DirpromptError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to {action}: {source}")]
    Write {
        action: String,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Invalid {kind} pattern '{pattern}': {source}")]
    InvalidPattern {
        kind: PatternKind,
        pattern: String,
        source: globset::Error,
    },
    #[error("A root directory is required (pass it as an argument or with --dir)")]
    MissingRoot,
    #[error("Failed to estimate tokens: {0}")]
    Tokenize(String),
}

impl DirpromptError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DirpromptError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(action: impl Into<String>, source: std::io::Error) -> Self {
        DirpromptError::Write {
            action: action.into(),
            source,
        }
    }
}
