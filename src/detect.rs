//! Heuristic text/binary classification.

use crate::error::DirpromptError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected per file.
pub const SAMPLE_LEN: usize = 512;

/// Classifies a byte sample as text.
///
/// Any NUL byte means binary. Otherwise the sample is binary when more than
/// 10% of its bytes are control bytes: values below 32 other than tab, line
/// feed and carriage return, plus every value of 127 or above. An empty sample
/// is text.
///
/// This is a heuristic. UTF-16 text is reported as binary, and so is valid
/// UTF-8 with a high share of multi-byte characters.
pub fn is_text(sample: &[u8]) -> bool {
    if sample.contains(&0) {
        return false;
    }
    let control = sample.iter().filter(|&&b| is_control(b)).count();
    // binary iff control / len > 0.1
    control * 10 <= sample.len()
}

fn is_control(byte: u8) -> bool {
    (byte < 32 && !matches!(byte, b'\t' | b'\n' | b'\r')) || byte >= 127
}

/// Reads up to [`SAMPLE_LEN`] bytes of `path` and classifies them with [`is_text`].
pub fn is_text_file(path: &Path) -> Result<bool, DirpromptError> {
    let file = File::open(path).map_err(|e| DirpromptError::io(path, e))?;
    let mut sample = Vec::with_capacity(SAMPLE_LEN);
    file.take(SAMPLE_LEN as u64)
        .read_to_end(&mut sample)
        .map_err(|e| DirpromptError::io(path, e))?;
    Ok(is_text(&sample))
}
