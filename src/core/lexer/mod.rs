//! Tokenizer - scans raw expression text into a typed token sequence.

pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;

// Re-export types
pub use tokenizer::Lexer;
pub use tokens::{Token, TokenizeError};

/// Tokenize an expression string.
///
/// Whitespace is skipped; classification is longest-match. The first
/// unrecognized character aborts the scan, discarding partial output.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    tracing::debug!("tokenizing {} bytes", source.len());

    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token() {
        tokens.push(token?);
    }

    tracing::debug!("tokenized {} tokens", tokens.len());
    Ok(tokens)
}
