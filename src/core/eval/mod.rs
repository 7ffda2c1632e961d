//! Postfix evaluator - reduces an RPN token sequence to a single value.

pub mod context;

// Re-export types
pub use context::{AngleMode, EvaluationContext};

use thiserror::Error;

use crate::core::lexer::Token;
use crate::core::registry;

/// Evaluation error
#[derive(Debug, Clone, Error)]
pub enum EvalError {
    #[error("Unknown constant: {0}")]
    UnknownConstant(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Modulo by zero")]
    ModuloByZero,

    /// Invariant violation: the postfix sequence did not reduce cleanly.
    /// This points at a converter bug, not at user input.
    #[error("Malformed postfix sequence: {0}")]
    MalformedSequence(String),
}

/// Evaluate a postfix token sequence against the given context.
///
/// The operand stack lives for exactly one call; the context is read-only
/// and no reference to it is retained after returning.
pub fn evaluate(rpn: &[Token], ctx: &EvaluationContext) -> Result<f64, EvalError> {
    tracing::debug!("evaluating {} postfix tokens", rpn.len());

    let mut stack: Vec<f64> = Vec::new();

    for token in rpn {
        match token {
            Token::Number(value) => stack.push(*value),
            Token::Constant(name) => stack.push(constant_value(name, ctx)?),
            Token::Operator(symbol) => {
                let b = pop_operand(&mut stack)?;
                let a = pop_operand(&mut stack)?;
                stack.push(apply_operator(*symbol, a, b)?);
            }
            Token::Function(name) => {
                let spec = registry::function_spec(name)
                    .ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;
                if stack.len() < spec.arity {
                    tracing::error!("operand stack underflow applying '{}'", spec.name);
                    return Err(EvalError::MalformedSequence(format!(
                        "operand stack underflow in '{}'",
                        spec.name
                    )));
                }
                let split = stack.len() - spec.arity;
                let args = stack.split_off(split);
                stack.push((spec.handler)(&args, ctx)?);
            }
            other => {
                tracing::error!("structural token {:?} reached the evaluator", other);
                return Err(EvalError::MalformedSequence(format!(
                    "unexpected token '{}' in postfix sequence",
                    other.lexeme()
                )));
            }
        }
    }

    if stack.len() != 1 {
        tracing::error!("operand stack holds {} values after evaluation", stack.len());
        return Err(EvalError::MalformedSequence(format!(
            "{} values left on the operand stack",
            stack.len()
        )));
    }
    Ok(stack[0])
}

fn constant_value(name: &str, ctx: &EvaluationContext) -> Result<f64, EvalError> {
    match name.to_ascii_lowercase().as_str() {
        "pi" => Ok(std::f64::consts::PI),
        "e" => Ok(std::f64::consts::E),
        "m" => Ok(ctx.memory),
        _ => Err(EvalError::UnknownConstant(name.to_string())),
    }
}

fn pop_operand(stack: &mut Vec<f64>) -> Result<f64, EvalError> {
    stack
        .pop()
        .ok_or_else(|| EvalError::MalformedSequence("operand stack underflow".to_string()))
}

fn apply_operator(symbol: char, a: f64, b: f64) -> Result<f64, EvalError> {
    match symbol {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' => {
            if b == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
        // f64 `%` is fmod: remainder keeps the sign of the dividend
        '%' => {
            if b == 0.0 {
                Err(EvalError::ModuloByZero)
            } else {
                Ok(a % b)
            }
        }
        '^' => Ok(a.powf(b)),
        _ => Err(EvalError::MalformedSequence(format!(
            "unknown operator '{symbol}'"
        ))),
    }
}
