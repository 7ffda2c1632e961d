//! Shunting-yard converter - resolves precedence, associativity, unary
//! signs, and grouping, turning the infix token sequence into postfix.

pub mod converter;

#[cfg(test)]
mod tests;

// Re-export types
pub use converter::Converter;

use thiserror::Error;

use crate::core::lexer::Token;

/// Structural grouping error
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("Misplaced comma")]
    MisplacedComma,

    #[error("Mismatched parentheses")]
    MismatchedParens,
}

/// Convert an infix token sequence to postfix (RPN) order.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    tracing::debug!("converting {} infix tokens", tokens.len());

    let rpn = Converter::new(tokens).run()?;

    tracing::debug!("postfix sequence holds {} tokens", rpn.len());
    Ok(rpn)
}
