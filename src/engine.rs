use crate::detect::is_text_file;
use crate::error::DirpromptError;
use crate::filter::PatternFilter;
use crate::options::PromptOptions;
use crate::output::{Sink, write_file_block};
use crate::tokens::estimate_tokens;
use crate::tree::render_tree;
use crate::types::{MatchedFile, RunSummary};
use ignore::WalkBuilder;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const NO_TEXT_FILES: &str = "No text files found or all matched files were binary.";

struct Walker {
    inner: ignore::Walk,
    root: PathBuf,
    own_output: Option<PathBuf>,
}

impl Walker {
    fn new(options: &PromptOptions, own_output: Option<&Path>) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder.standard_filters(false).follow_links(false);
        Self {
            inner: builder.build(),
            root: options.root.clone(),
            own_output: own_output.map(Path::to_path_buf),
        }
    }

    /// Yields every non-directory entry under the root with its slash-normalized relative path.
    fn files(self) -> impl Iterator<Item = Result<(String, PathBuf), DirpromptError>> {
        let Walker {
            inner,
            root,
            own_output,
        } = self;
        inner.filter_map(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => return Some(Err(DirpromptError::Walk(e.to_string()))),
            };
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                return None;
            }
            if is_same_file(entry.path(), own_output.as_deref()) {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping output file: {}", entry.path().display());
                return None;
            }
            Some(relative_path(&root, entry.path()).map(|rel| (rel, entry.into_path())))
        })
    }
}

fn is_same_file(path: &Path, target: Option<&Path>) -> bool {
    let Some(target) = target else {
        return false;
    };
    path.file_name() == target.file_name()
        && path.canonicalize().is_ok_and(|canonical| canonical == target)
}

/// Relative path of `path` under `root`, with `/` separators.
fn relative_path(root: &Path, path: &Path) -> Result<String, DirpromptError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        DirpromptError::InvalidPath(format!(
            "{} is not under {}",
            path.display(),
            root.display()
        ))
    })?;
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        // the root itself is a file
        return Ok(path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default());
    }
    Ok(joined)
}

/// Runs the whole pipeline: writes the prompt to the configured output and
/// diagnostics to stderr.
///
/// Patterns are compiled before the output is created or the root is read, so
/// configuration errors leave the filesystem untouched.
pub fn dirprompt(options: &PromptOptions) -> Result<RunSummary, DirpromptError> {
    let filter = PatternFilter::new(&options.include_patterns, &options.exclude_patterns)?;
    let mut sink = Sink::open(&options.output)?;
    let own_output = sink.path().and_then(|p| p.canonicalize().ok());
    let stderr = io::stderr();
    let mut diag = stderr.lock();
    run(options, &filter, own_output.as_deref(), &mut sink, &mut diag)
}

/// Same as [`dirprompt`], but writes the prompt to `out` and diagnostics to
/// `diag`. `options.output` is ignored.
pub fn dirprompt_to<W, D>(
    options: &PromptOptions,
    out: &mut W,
    diag: &mut D,
) -> Result<RunSummary, DirpromptError>
where
    W: Write + ?Sized,
    D: Write + ?Sized,
{
    let filter = PatternFilter::new(&options.include_patterns, &options.exclude_patterns)?;
    run(options, &filter, None, out, diag)
}

fn run<W, D>(
    options: &PromptOptions,
    filter: &PatternFilter,
    own_output: Option<&Path>,
    out: &mut W,
    diag: &mut D,
) -> Result<RunSummary, DirpromptError>
where
    W: Write + ?Sized,
    D: Write + ?Sized,
{
    #[cfg(feature = "logging")]
    tracing::debug!("Starting dirprompt with root: {}", options.root.display());
    let (mut files, skipped_binary) = collect_matches(options, filter, own_output, diag)?;

    if files.is_empty() {
        writeln!(diag, "{NO_TEXT_FILES}")
            .map_err(|e| DirpromptError::write("write diagnostics", e))?;
        return Ok(RunSummary {
            skipped_binary,
            ..Default::default()
        });
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));
    let relatives: Vec<String> = files.iter().map(|f| f.relative.clone()).collect();

    let tree = render_tree(&relatives);
    out.write_all(tree.as_bytes())
        .map_err(|e| DirpromptError::write("write directory structure", e))?;
    let mut emitted = options.estimate_tokens.then(|| tree.into_bytes());

    for file in &files {
        let content = fs::read(&file.path).map_err(|e| DirpromptError::io(&file.path, e))?;
        write_file_block(out, &file.relative, &content)
            .map_err(|e| DirpromptError::write(format!("write {}", file.relative), e))?;
        if let Some(buffer) = emitted.as_mut() {
            write_file_block(buffer, &file.relative, &content)
                .map_err(|e| DirpromptError::write(format!("buffer {}", file.relative), e))?;
        }
    }
    out.flush().map_err(|e| DirpromptError::write("flush output", e))?;

    let estimated_tokens = match emitted {
        Some(buffer) => {
            let count = estimate_tokens(&String::from_utf8_lossy(&buffer))?;
            writeln!(diag, "\nEstimated tokens: {count}")
                .map_err(|e| DirpromptError::write("write diagnostics", e))?;
            Some(count)
        }
        None => None,
    };

    Ok(RunSummary {
        files: relatives,
        skipped_binary,
        estimated_tokens,
    })
}

fn collect_matches<D: Write + ?Sized>(
    options: &PromptOptions,
    filter: &PatternFilter,
    own_output: Option<&Path>,
    diag: &mut D,
) -> Result<(Vec<MatchedFile>, Vec<String>), DirpromptError> {
    let mut matched = Vec::new();
    let mut skipped = Vec::new();
    for item in Walker::new(options, own_output).files() {
        let (relative, path) = item?;
        if !filter.is_match(&relative) {
            continue;
        }
        if is_text_file(&path)? {
            matched.push(MatchedFile { relative, path });
        } else {
            #[cfg(feature = "logging")]
            tracing::debug!("Binary file detected: {}", path.display());
            writeln!(diag, "Warning: Skipping binary file: {relative}")
                .map_err(|e| DirpromptError::write("write diagnostics", e))?;
            skipped.push(relative);
        }
    }
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Matched {} text files, skipped {} binary",
        matched.len(),
        skipped.len()
    );
    Ok((matched, skipped))
}
