//! bigcalc
//!
//! A scientific infix expression calculator: tokenizer, shunting-yard
//! infix-to-postfix converter, and postfix evaluator backed by a static
//! operator/function registry.
//!
//! # Example
//!
//! ```
//! use bigcalc::core::{eval_expression, EvaluationContext};
//!
//! let ctx = EvaluationContext::default();
//! let value = eval_expression("sin(pi/2) + 1", &ctx).unwrap();
//! assert!((value - 2.0).abs() < 1e-12);
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod core;
pub mod repl;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

pub use crate::core::{eval_expression, AngleMode, CalcError, EvaluationContext};

use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Calculator name
pub const NAME: &str = "bigcalc";

/// Evaluate one expression line with a fresh default context.
///
/// Convenience for one-shot callers (the `eval` subcommand, doctests);
/// interactive use goes through [`repl::LineRepl`], which owns a live
/// context across lines.
pub fn eval_line(source: &str) -> Result<f64> {
    debug!("eval_line called");
    let ctx = EvaluationContext::default();
    let value = eval_expression(source, &ctx)
        .with_context(|| format!("failed to evaluate: {source}"))?;
    Ok(value)
}
