//! Function semantics tests

#[cfg(test)]
mod function_tests {
    use bigcalc::core::{eval_expression, EvaluationContext};

    fn eval(source: &str) -> f64 {
        eval_expression(source, &EvaluationContext::default()).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_factorial() {
        assert_eq!(eval("fact(0)"), 1.0);
        assert_eq!(eval("fact(5)"), 120.0);
        assert_eq!(eval("fact(170)"), eval("fact(169)") * 170.0);
    }

    #[test]
    fn test_combinations() {
        assert_eq!(eval("nCr(5,2)"), 10.0);
        assert_eq!(eval("nCr(5,0)"), 1.0);
        assert_eq!(eval("nCr(52,5)"), 2_598_960.0);
    }

    #[test]
    fn test_permutations() {
        assert_eq!(eval("nPr(5,2)"), 20.0);
        assert_eq!(eval("nPr(5,5)"), 120.0);
        assert_eq!(eval("nPr(5,0)"), 1.0);
    }

    #[test]
    fn test_combinatorics_round_arguments() {
        assert_eq!(eval("nCr(5.0000001, 2)"), 10.0);
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(eval("gcd(12,18)"), 6.0);
        assert_eq!(eval("gcd(-12,18)"), 6.0);
        assert_eq!(eval("lcm(4,6)"), 12.0);
        assert_eq!(eval("lcm(0,5)"), 0.0);
    }

    #[test]
    fn test_roots_and_logs() {
        assert_eq!(eval("sqrt(9)"), 3.0);
        assert_eq!(eval("cbrt(-8)"), -2.0);
        assert!(close(eval("ln(e)"), 1.0));
        assert!(close(eval("log(1000)"), 3.0));
    }

    #[test]
    fn test_exponentials() {
        assert!(close(eval("exp(0)"), 1.0));
        assert_eq!(eval("pow(2,10)"), 1024.0);
        assert!(close(eval("pow(2,-1)"), 0.5));
    }

    #[test]
    fn test_rounding_functions() {
        assert_eq!(eval("floor(2.7)"), 2.0);
        assert_eq!(eval("ceil(2.1)"), 3.0);
        assert_eq!(eval("abs(-4.5)"), 4.5);
    }

    #[test]
    fn test_hyperbolics() {
        assert!(close(eval("sinh(0)"), 0.0));
        assert!(close(eval("cosh(0)"), 1.0));
        assert!(close(eval("tanh(0)"), 0.0));
    }

    #[test]
    fn test_trig_identity() {
        let value = eval("sin(1)^2 + cos(1)^2");
        assert!(close(value, 1.0));
    }

    #[test]
    fn test_function_names_case_insensitive() {
        assert_eq!(eval("NCR(5,2)"), eval("ncr(5,2)"));
        assert_eq!(eval("Sqrt(4)"), 2.0);
    }
}
