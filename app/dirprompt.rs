//! Command-line interface for dirprompt.
//!
//! Scans a directory, selects text files with include/exclude globs and
//! writes them, framed with their relative paths, to stdout or a file.

use clap::Parser;
use dirprompt::{DirpromptError, OutputTarget, PromptBuilder, PromptOptions, dirprompt};
use std::path::PathBuf;
use std::process::exit;

/// dirprompt — concatenate a directory into a single LLM-ready prompt
#[derive(Parser)]
#[command(
    name = "dirprompt",
    version,
    about,
    long_about = "Scan a directory, select text files with include/exclude glob patterns and \
                  write their contents to a single output stream or file. Each file is framed \
                  with its relative path, and a directory tree is printed first, which makes \
                  the output convenient context for large language models."
)]
struct Cli {
    /// Root directory to scan
    #[arg(value_name = "DIR")]
    root: Option<PathBuf>,

    /// Root directory to scan (alternative to the positional argument)
    #[arg(long = "dir", value_name = "DIR", conflicts_with = "root")]
    dir: Option<PathBuf>,

    /// Comma-separated glob patterns of files to include (default: all files)
    #[arg(long, value_name = "GLOBS", default_value = "")]
    include_files: String,

    /// Comma-separated glob patterns of files to exclude
    #[arg(long, value_name = "GLOBS", default_value = "")]
    exclude_files: String,

    /// Output destination: a file path, or '-' for stdout
    #[arg(short, long, value_name = "PATH", default_value = "-")]
    output: String,

    /// Estimate the token count of the output and print it to stderr
    #[arg(long)]
    estimate_tokens: bool,
}

impl Cli {
    fn into_options(self) -> Result<PromptOptions, DirpromptError> {
        let root = self.dir.or(self.root).ok_or(DirpromptError::MissingRoot)?;
        let mut builder = PromptBuilder::new(root);
        // only an absent flag means "all files"; a list of blanks matches nothing
        if !self.include_files.is_empty() {
            builder = builder.include_patterns(dirprompt::split_patterns(&self.include_files));
        }
        Ok(builder
            .exclude_patterns(dirprompt::split_patterns(&self.exclude_files))
            .output(OutputTarget::parse(&self.output))
            .estimate_tokens(self.estimate_tokens)
            .build())
    }
}

fn main() {
    let cli = Cli::parse();
    let result = cli.into_options().and_then(|options| dirprompt(&options));
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
