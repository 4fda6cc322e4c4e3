//! Include/exclude glob filtering on slash-normalized relative paths.
//!
//! Patterns use the `globset` dialect with its default settings: `*` and `?`
//! also match `/`, so `*.go` admits both `main.go` and `cmd/main.go`.
//! Multiple include patterns are OR-ed, and so are multiple exclude
//! patterns, but exclusion is checked first and always wins. There is no
//! way to re-include a file that an exclude pattern matched.

use crate::error::{DirpromptError, PatternKind};
use globset::{Glob, GlobSet, GlobSetBuilder};

#[derive(Debug, Clone)]
pub struct PatternFilter {
    include: GlobSet,
    exclude: GlobSet,
}

impl PatternFilter {
    /// Compiles both pattern lists. Fails on the first syntactically invalid glob.
    pub fn new(includes: &[String], excludes: &[String]) -> Result<Self, DirpromptError> {
        Ok(Self {
            include: build_globset(includes, PatternKind::Include)?,
            exclude: build_globset(excludes, PatternKind::Exclude)?,
        })
    }

    /// Returns `true` if `relative` is admitted.
    ///
    /// With no include patterns nothing is admitted; the match-all default is
    /// the include list of [`crate::PromptBuilder`] until it is replaced.
    pub fn is_match(&self, relative: &str) -> bool {
        if self.exclude.is_match(relative) {
            return false;
        }
        self.include.is_match(relative)
    }
}

fn build_globset(patterns: &[String], kind: PatternKind) -> Result<GlobSet, DirpromptError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| DirpromptError::InvalidPattern {
            kind,
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| DirpromptError::InvalidPattern {
        kind,
        pattern: patterns.join(","),
        source,
    })
}
