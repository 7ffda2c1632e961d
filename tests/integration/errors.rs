//! Error taxonomy tests across the pipeline

#[cfg(test)]
mod error_tests {
    use bigcalc::core::{
        eval_expression, CalcError, EvalError, EvaluationContext, ParseError, TokenizeError,
    };

    fn eval_err(source: &str) -> CalcError {
        eval_expression(source, &EvaluationContext::default()).unwrap_err()
    }

    #[test]
    fn test_unexpected_character() {
        assert!(matches!(
            eval_err("3 + #"),
            CalcError::Tokenize(TokenizeError::UnexpectedCharacter { ch: '#', .. })
        ));
    }

    #[test]
    fn test_mismatched_parens() {
        assert!(matches!(
            eval_err("(3+4"),
            CalcError::Parse(ParseError::MismatchedParens)
        ));
        assert!(matches!(
            eval_err("3+4)"),
            CalcError::Parse(ParseError::MismatchedParens)
        ));
    }

    #[test]
    fn test_misplaced_comma() {
        assert!(matches!(
            eval_err("3,4"),
            CalcError::Parse(ParseError::MisplacedComma)
        ));
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(
            eval_err("1/0"),
            CalcError::Eval(EvalError::DivisionByZero)
        ));
    }

    #[test]
    fn test_modulo_by_zero() {
        assert!(matches!(
            eval_err("5%0"),
            CalcError::Eval(EvalError::ModuloByZero)
        ));
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(
            eval_err("sqrt(-1)"),
            CalcError::Eval(EvalError::DomainError(_))
        ));
        assert!(matches!(
            eval_err("ln(0)"),
            CalcError::Eval(EvalError::DomainError(_))
        ));
        assert!(matches!(
            eval_err("log(-2)"),
            CalcError::Eval(EvalError::DomainError(_))
        ));
        assert!(matches!(
            eval_err("fact(171)"),
            CalcError::Eval(EvalError::DomainError(_))
        ));
        assert!(matches!(
            eval_err("fact(-1)"),
            CalcError::Eval(EvalError::DomainError(_))
        ));
        assert!(matches!(
            eval_err("fact(2.5)"),
            CalcError::Eval(EvalError::DomainError(_))
        ));
        assert!(matches!(
            eval_err("nCr(2,5)"),
            CalcError::Eval(EvalError::DomainError(_))
        ));
        assert!(matches!(
            eval_err("nPr(-1,0)"),
            CalcError::Eval(EvalError::DomainError(_))
        ));
    }

    #[test]
    fn test_unknown_function_defers_to_evaluation() {
        // the typo scans and converts fine; only evaluation rejects it
        assert!(matches!(
            eval_err("frobnicate(1)"),
            CalcError::Eval(EvalError::UnknownFunction(name)) if name == "frobnicate"
        ));
    }

    #[test]
    fn test_power_of_negative_base_is_not_an_error() {
        // real-valued exponentiation may produce NaN, never an error
        let value = eval_expression("(-8)^0.5", &EvaluationContext::default()).unwrap();
        assert!(value.is_nan());
    }

    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(eval_err("1/0").to_string(), "Division by zero");
        assert_eq!(eval_err("5%0").to_string(), "Modulo by zero");
        assert_eq!(eval_err("(1").to_string(), "Mismatched parentheses");
        assert_eq!(eval_err("1,2").to_string(), "Misplaced comma");
    }
}
