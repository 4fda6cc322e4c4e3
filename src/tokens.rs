use crate::error::DirpromptError;

/// Counts tokens in `text` with the `cl100k_base` encoding (GPT-3.5/4).
pub fn estimate_tokens(text: &str) -> Result<usize, DirpromptError> {
    let bpe = tiktoken_rs::cl100k_base().map_err(|e| DirpromptError::Tokenize(e.to_string()))?;
    Ok(bpe.encode_ordinary(text).len())
}
