//! Determinism properties
//!
//! Re-running the pipeline over the same input and context must produce
//! the same outcome; no state leaks between evaluations.

use proptest::prelude::*;

use bigcalc::core::{eval_expression, EvaluationContext};

/// Well-formed expression strings without the `M` constant.
fn arb_expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 1u32..100).prop_map(|(whole, frac)| format!("{whole}.{frac}")),
        Just("pi".to_string()),
        Just("e".to_string()),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop_oneof![Just('+'), Just('-'), Just('*'), Just('/'), Just('%'), Just('^')],
                inner.clone()
            )
                .prop_map(|(a, op, b)| format!("({a} {op} {b})")),
            inner.clone().prop_map(|a| format!("-({a})")),
            inner.clone().prop_map(|a| format!("abs({a})")),
            inner.clone().prop_map(|a| format!("sin({a})")),
            (inner.clone(), inner).prop_map(|(a, b)| format!("pow({a}, {b})")),
        ]
    })
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(expr in arb_expression()) {
        let ctx = EvaluationContext::default();
        let first = eval_expression(&expr, &ctx);
        let second = eval_expression(&expr, &ctx);

        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert!(a == b || (a.is_nan() && b.is_nan()), "{a} != {b} for {expr}");
            }
            (Err(_), Err(_)) => {}
            (a, b) => prop_assert!(false, "diverging outcomes for {expr}: {a:?} vs {b:?}"),
        }
    }

    #[test]
    fn evaluation_ignores_interleaved_work(expr in arb_expression()) {
        let ctx = EvaluationContext::default();
        let before = eval_expression(&expr, &ctx);
        // unrelated evaluations in between must not change the outcome
        let _ = eval_expression("1+1", &ctx);
        let _ = eval_expression("fact(10)", &ctx);
        let after = eval_expression(&expr, &ctx);

        match (before, after) {
            (Ok(a), Ok(b)) => {
                prop_assert!(a == b || (a.is_nan() && b.is_nan()), "{a} != {b} for {expr}");
            }
            (Err(_), Err(_)) => {}
            (a, b) => prop_assert!(false, "diverging outcomes for {expr}: {a:?} vs {b:?}"),
        }
    }

    #[test]
    fn pipeline_never_panics_on_ascii_input(line in "[ -~]{0,40}") {
        let ctx = EvaluationContext::default();
        let _ = eval_expression(&line, &ctx);
    }
}
