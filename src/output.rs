//! Output sink and per-file framing.
//!
//! Every matched file is written as
//!
//! ```text
//! ---
//! File: <relative path>
//! ---
//!
//! <raw content>
//!
//! ```
//!
//! with the content copied byte for byte.

use crate::error::DirpromptError;
use crate::options::OutputTarget;
use std::fs::File;
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::{Path, PathBuf};

/// Write destination for one run: buffered stdout or a freshly created file.
///
/// The underlying handle is released when the sink is dropped, so early
/// returns close it too. Call [`Write::flush`] to surface final write errors.
pub enum Sink {
    Stdout(BufWriter<StdoutLock<'static>>),
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
}

impl Sink {
    /// Opens the destination, creating or truncating the file target.
    pub fn open(target: &OutputTarget) -> Result<Self, DirpromptError> {
        match target {
            OutputTarget::Stdout => Ok(Sink::Stdout(BufWriter::new(io::stdout().lock()))),
            OutputTarget::File(path) => {
                let file = File::create(path).map_err(|e| DirpromptError::io(path, e))?;
                Ok(Sink::File {
                    path: path.clone(),
                    writer: BufWriter::new(file),
                })
            }
        }
    }

    /// Path of the output file, if the sink is a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Sink::Stdout(_) => None,
            Sink::File { path, .. } => Some(path),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout(w) => w.write(buf),
            Sink::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout(w) => w.flush(),
            Sink::File { writer, .. } => writer.flush(),
        }
    }
}

/// Header fence written before a file's content.
pub fn file_block_header(relative: &str) -> String {
    format!("---\nFile: {relative}\n---\n\n")
}

pub const FILE_BLOCK_TRAILER: &[u8] = b"\n\n";

/// Writes one framed file block to `writer`.
pub fn write_file_block<W: Write + ?Sized>(
    writer: &mut W,
    relative: &str,
    content: &[u8],
) -> io::Result<()> {
    writer.write_all(file_block_header(relative).as_bytes())?;
    writer.write_all(content)?;
    writer.write_all(FILE_BLOCK_TRAILER)
}
