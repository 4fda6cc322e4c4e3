//! # Dirprompt
//!
//! `dirprompt` walks a directory, keeps the files selected by include/exclude
//! glob patterns, skips anything that looks binary, and concatenates the rest
//! into one annotated text stream headed by a directory tree. The result is
//! meant to be pasted into, or piped to, a language model. Optionally the
//! token count of the emitted text is estimated with the `cl100k_base`
//! encoding.
//!
//! # Features
//!
//! - `logging` (default): emits debug events via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use dirprompt::{OutputTarget, PromptBuilder, dirprompt};
//!
//! let options = PromptBuilder::new("./src")
//!     .include_patterns(vec!["*.rs".into(), "*.toml".into()])
//!     .exclude_patterns(vec!["*_test.rs".into()])
//!     .output(OutputTarget::parse("prompt.txt"))
//!     .estimate_tokens(true)
//!     .build();
//!
//! let summary = dirprompt(&options).expect("Failed to build prompt");
//! println!("{} files, ~{:?} tokens", summary.files.len(), summary.estimated_tokens);
//! ```

mod detect;
mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod tokens;
mod tree;
mod types;

pub use detect::{SAMPLE_LEN, is_text, is_text_file};
pub use engine::{dirprompt, dirprompt_to};
pub use error::{DirpromptError, PatternKind};
pub use filter::PatternFilter;
pub use options::{MATCH_ALL, OutputTarget, PromptBuilder, PromptOptions, split_patterns};
pub use tokens::estimate_tokens;
pub use tree::{NO_FILES_MATCHED, TREE_HEADER, render_tree};
pub use types::{MatchedFile, RunSummary};
