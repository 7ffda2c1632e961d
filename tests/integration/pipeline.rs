//! End-to-end pipeline tests
//!
//! Each case runs text -> tokens -> postfix -> value through the public
//! surface.

#[cfg(test)]
mod pipeline_tests {
    use bigcalc::core::{
        eval_expression, evaluate, to_postfix, tokenize, AngleMode, EvaluationContext, Token,
    };

    fn eval(source: &str) -> f64 {
        eval_expression(source, &EvaluationContext::default()).unwrap()
    }

    #[test]
    fn test_tokenize_simple_sum() {
        let tokens = tokenize("3+4").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Number(3.0), Token::Operator('+'), Token::Number(4.0)]
        );
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("3+4*2"), 11.0);
        assert_eq!(eval("(3+4)*2"), 14.0);
    }

    #[test]
    fn test_power_right_associativity() {
        assert_eq!(eval("2^3^2"), 512.0);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(eval("-3+4"), 1.0);
        assert_eq!(eval("2*-3"), -6.0);
        assert_eq!(eval("-(1+2)"), -3.0);
    }

    #[test]
    fn test_modulo() {
        assert_eq!(eval("10%3"), 1.0);
    }

    #[test]
    fn test_constants() {
        assert!((eval("pi") - std::f64::consts::PI).abs() < 1e-15);
        assert!((eval("e") - std::f64::consts::E).abs() < 1e-15);
        assert_eq!(eval("M"), 0.0);
    }

    #[test]
    fn test_memory_constant_reads_context() {
        let ctx = EvaluationContext {
            angle_mode: AngleMode::Radians,
            memory: 42.0,
        };
        assert_eq!(eval_expression("M/2", &ctx).unwrap(), 21.0);
    }

    #[test]
    fn test_angle_modes() {
        let rad = EvaluationContext::default();
        assert!(eval_expression("sin(0)", &rad).unwrap().abs() < 1e-15);

        let deg = EvaluationContext::new(AngleMode::Degrees);
        assert!((eval_expression("sin(90)", &deg).unwrap() - 1.0).abs() < 1e-12);
        assert!((eval_expression("asin(1)", &deg).unwrap() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_stage_outputs_compose() {
        // the staged calls agree with the convenience wrapper
        let tokens = tokenize("1+2*3").unwrap();
        let rpn = to_postfix(&tokens).unwrap();
        let ctx = EvaluationContext::default();
        assert_eq!(evaluate(&rpn, &ctx).unwrap(), eval("1+2*3"));
    }

    #[test]
    fn test_whitespace_and_case_robustness() {
        assert_eq!(eval("  3 +   4 "), 7.0);
        assert_eq!(eval("SQRT(16)"), 4.0);
        assert!((eval("PI") - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_composite_expression() {
        let value = eval("sqrt(abs(-16)) + fact(3) * 2");
        assert_eq!(value, 16.0);
    }
}
