//! Operator and function registry
//!
//! Static, read-only metadata: operator precedence/associativity for the
//! converter, and function arity/domain rules/angle sensitivity for the
//! evaluator. No dynamic registration.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::eval::{EvalError, EvaluationContext};

/// Binary operator metadata
pub struct OperatorSpec {
    /// Operator symbol
    pub symbol: char,
    /// Higher binds tighter
    pub precedence: u8,
    /// Only `^` is right-associative
    pub right_associative: bool,
}

/// Handler signature: operands in source order, plus the evaluation context.
///
/// The evaluator passes exactly `arity` operands; handlers own their domain
/// checks and return the first failure.
pub type FunctionHandler = fn(&[f64], &EvaluationContext) -> Result<f64, EvalError>;

/// Function metadata
pub struct FunctionSpec {
    /// Canonical (lowercase) name
    pub name: &'static str,
    /// Number of operands popped from the stack
    pub arity: usize,
    /// Evaluation rule
    pub handler: FunctionHandler,
}

/// Operator table, keyed by symbol
pub static OPERATORS: Lazy<HashMap<char, OperatorSpec>> = Lazy::new(|| {
    let specs = [
        OperatorSpec {
            symbol: '+',
            precedence: 2,
            right_associative: false,
        },
        OperatorSpec {
            symbol: '-',
            precedence: 2,
            right_associative: false,
        },
        OperatorSpec {
            symbol: '*',
            precedence: 3,
            right_associative: false,
        },
        OperatorSpec {
            symbol: '/',
            precedence: 3,
            right_associative: false,
        },
        OperatorSpec {
            symbol: '%',
            precedence: 3,
            right_associative: false,
        },
        OperatorSpec {
            symbol: '^',
            precedence: 4,
            right_associative: true,
        },
    ];
    specs.into_iter().map(|spec| (spec.symbol, spec)).collect()
});

/// Function registry, initialized once
pub static FUNCTIONS: Lazy<FunctionRegistry> = Lazy::new(|| {
    let mut registry = FunctionRegistry::new();
    registry.init_builtins();
    registry
});

/// Look up a binary operator by symbol
pub fn operator_spec(symbol: char) -> Option<&'static OperatorSpec> {
    OPERATORS.get(&symbol)
}

/// Look up a function by name (case-insensitive)
pub fn function_spec(name: &str) -> Option<&'static FunctionSpec> {
    FUNCTIONS.get(name)
}

/// Whether the name resolves to a registered function
pub fn is_function_name(name: &str) -> bool {
    function_spec(name).is_some()
}

/// Whether the name is one of the known constants (`pi`, `e`, `M`)
pub fn is_constant_name(name: &str) -> bool {
    matches!(name.to_ascii_lowercase().as_str(), "pi" | "e" | "m")
}

/// Name-keyed function table
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<&'static str, FunctionSpec>,
}

impl FunctionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register a function spec under its canonical name
    fn register(&mut self, spec: FunctionSpec) {
        self.functions.insert(spec.name, spec);
    }

    /// Get a function spec, matching the name case-insensitively
    pub fn get(&self, name: &str) -> Option<&FunctionSpec> {
        self.functions.get(name.to_ascii_lowercase().as_str())
    }

    /// Register every built-in function
    fn init_builtins(&mut self) {
        // unary sign pseudo-functions, produced by the converter
        self.register(FunctionSpec {
            name: "uplus",
            arity: 1,
            handler: builtin_uplus,
        });
        self.register(FunctionSpec {
            name: "uminus",
            arity: 1,
            handler: builtin_uminus,
        });

        // trigonometry (angle-mode sensitive on input)
        self.register(FunctionSpec {
            name: "sin",
            arity: 1,
            handler: builtin_sin,
        });
        self.register(FunctionSpec {
            name: "cos",
            arity: 1,
            handler: builtin_cos,
        });
        self.register(FunctionSpec {
            name: "tan",
            arity: 1,
            handler: builtin_tan,
        });

        // inverse trigonometry (angle-mode sensitive on output)
        self.register(FunctionSpec {
            name: "asin",
            arity: 1,
            handler: builtin_asin,
        });
        self.register(FunctionSpec {
            name: "acos",
            arity: 1,
            handler: builtin_acos,
        });
        self.register(FunctionSpec {
            name: "atan",
            arity: 1,
            handler: builtin_atan,
        });

        // hyperbolic and exponential, angle-mode independent
        self.register(FunctionSpec {
            name: "sinh",
            arity: 1,
            handler: builtin_sinh,
        });
        self.register(FunctionSpec {
            name: "cosh",
            arity: 1,
            handler: builtin_cosh,
        });
        self.register(FunctionSpec {
            name: "tanh",
            arity: 1,
            handler: builtin_tanh,
        });
        self.register(FunctionSpec {
            name: "exp",
            arity: 1,
            handler: builtin_exp,
        });

        // roots and logarithms
        self.register(FunctionSpec {
            name: "sqrt",
            arity: 1,
            handler: builtin_sqrt,
        });
        self.register(FunctionSpec {
            name: "cbrt",
            arity: 1,
            handler: builtin_cbrt,
        });
        self.register(FunctionSpec {
            name: "ln",
            arity: 1,
            handler: builtin_ln,
        });
        self.register(FunctionSpec {
            name: "log",
            arity: 1,
            handler: builtin_log,
        });

        // powers and rounding
        self.register(FunctionSpec {
            name: "pow",
            arity: 2,
            handler: builtin_pow,
        });
        self.register(FunctionSpec {
            name: "abs",
            arity: 1,
            handler: builtin_abs,
        });
        self.register(FunctionSpec {
            name: "floor",
            arity: 1,
            handler: builtin_floor,
        });
        self.register(FunctionSpec {
            name: "ceil",
            arity: 1,
            handler: builtin_ceil,
        });

        // combinatorics and integer helpers
        self.register(FunctionSpec {
            name: "fact",
            arity: 1,
            handler: builtin_fact,
        });
        self.register(FunctionSpec {
            name: "ncr",
            arity: 2,
            handler: builtin_ncr,
        });
        self.register(FunctionSpec {
            name: "npr",
            arity: 2,
            handler: builtin_npr,
        });
        self.register(FunctionSpec {
            name: "gcd",
            arity: 2,
            handler: builtin_gcd,
        });
        self.register(FunctionSpec {
            name: "lcm",
            arity: 2,
            handler: builtin_lcm,
        });
    }
}

// === handlers ===

fn builtin_uplus(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(args[0])
}

fn builtin_uminus(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(-args[0])
}

fn builtin_sin(args: &[f64], ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(ctx.angle_mode.to_radians(args[0]).sin())
}

fn builtin_cos(args: &[f64], ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(ctx.angle_mode.to_radians(args[0]).cos())
}

fn builtin_tan(args: &[f64], ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(ctx.angle_mode.to_radians(args[0]).tan())
}

fn builtin_asin(args: &[f64], ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(ctx.angle_mode.from_radians(args[0].asin()))
}

fn builtin_acos(args: &[f64], ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(ctx.angle_mode.from_radians(args[0].acos()))
}

fn builtin_atan(args: &[f64], ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(ctx.angle_mode.from_radians(args[0].atan()))
}

fn builtin_sinh(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(args[0].sinh())
}

fn builtin_cosh(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(args[0].cosh())
}

fn builtin_tanh(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(args[0].tanh())
}

fn builtin_exp(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(args[0].exp())
}

fn builtin_sqrt(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    let a = args[0];
    if a < 0.0 {
        return Err(EvalError::DomainError(
            "square root of a negative number".to_string(),
        ));
    }
    Ok(a.sqrt())
}

fn builtin_cbrt(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(args[0].cbrt())
}

fn builtin_ln(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    let a = args[0];
    if a <= 0.0 {
        return Err(EvalError::DomainError(
            "logarithm of a non-positive number".to_string(),
        ));
    }
    Ok(a.ln())
}

fn builtin_log(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    let a = args[0];
    if a <= 0.0 {
        return Err(EvalError::DomainError(
            "logarithm of a non-positive number".to_string(),
        ));
    }
    Ok(a.log10())
}

fn builtin_pow(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(args[0].powf(args[1]))
}

fn builtin_abs(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(args[0].abs())
}

fn builtin_floor(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(args[0].floor())
}

fn builtin_ceil(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    Ok(args[0].ceil())
}

fn builtin_fact(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    let a = args[0];
    if a < 0.0 {
        return Err(EvalError::DomainError(
            "factorial of a negative number".to_string(),
        ));
    }
    let rounded = (a + 0.5).floor();
    if (a - rounded).abs() > 1e-9 {
        return Err(EvalError::DomainError(
            "factorial of a non-integer".to_string(),
        ));
    }
    // 171! exceeds the f64 range
    if rounded > 170.0 {
        return Err(EvalError::DomainError(
            "factorial argument exceeds 170".to_string(),
        ));
    }
    let n = rounded as i64;
    let mut result = 1.0;
    for i in 2..=n {
        result *= i as f64;
    }
    Ok(result)
}

/// Round a pair of combinatorial arguments to the nearest integers.
fn round_pair(args: &[f64]) -> (i64, i64) {
    (
        (args[0] + 0.5).floor() as i64,
        (args[1] + 0.5).floor() as i64,
    )
}

fn builtin_ncr(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    let (n, k) = round_pair(args);
    if n < 0 || k < 0 || k > n {
        return Err(EvalError::DomainError(
            "nCr expects 0 <= k <= n".to_string(),
        ));
    }
    // multiplicative formula over the smaller of k and n-k keeps the
    // intermediate products inside f64 range far longer than factorials
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 1..=k {
        result = result * (n - k + i) as f64 / i as f64;
    }
    Ok(result)
}

fn builtin_npr(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    let (n, k) = round_pair(args);
    if n < 0 || k < 0 || k > n {
        return Err(EvalError::DomainError(
            "nPr expects 0 <= k <= n".to_string(),
        ));
    }
    let mut result = 1.0;
    for i in 0..k {
        result *= (n - i) as f64;
    }
    Ok(result)
}

fn builtin_gcd(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    let a = args[0].round() as i64;
    let b = args[1].round() as i64;
    Ok(i64_gcd(a, b) as f64)
}

fn builtin_lcm(args: &[f64], _ctx: &EvaluationContext) -> Result<f64, EvalError> {
    let a = args[0].round() as i64;
    let b = args[1].round() as i64;
    Ok(i64_lcm(a, b) as f64)
}

/// Euclidean algorithm on magnitudes
fn i64_gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn i64_lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / i64_gcd(a, b) * b).abs()
}
