//! Expression pipeline: text -> tokens -> postfix -> value.
//!
//! Data flow is strictly linear and stateless; the only carried-in state
//! is the [`EvaluationContext`] the caller supplies per evaluation.

pub mod eval;
pub mod lexer;
pub mod parser;
pub mod registry;

// Re-export the pipeline surface
pub use eval::{evaluate, AngleMode, EvalError, EvaluationContext};
pub use lexer::{tokenize, Token, TokenizeError};
pub use parser::{to_postfix, ParseError};

use thiserror::Error;

/// Any failure from any pipeline stage.
#[derive(Debug, Clone, Error)]
pub enum CalcError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Run the full pipeline over one expression string.
pub fn eval_expression(source: &str, ctx: &EvaluationContext) -> Result<f64, CalcError> {
    tracing::debug!("evaluating expression: {source}");

    let tokens = tokenize(source)?;
    let rpn = to_postfix(&tokens)?;
    let value = evaluate(&rpn, ctx)?;

    tracing::debug!("expression result: {value}");
    Ok(value)
}
