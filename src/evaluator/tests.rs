use std::thread;

use crate::evaluator::{CalcError, ErrorKind, Evaluator, EvaluatorConfig};
use crate::expression::EvalError;

#[test]
fn test_evaluator_creation() {
    let evaluator = Evaluator::new();
    assert_eq!(evaluator.config(), &EvaluatorConfig::default());
    assert_eq!(evaluator.evaluate("(2 + 3) * 4"), Ok(20.0));
}

#[test]
fn test_error_kinds() {
    let evaluator = Evaluator::new();

    let cases = [
        ("9 / 0", ErrorKind::DivisionByZero),
        ("__import__('os').system('echo bad')", ErrorKind::Unsupported),
        ("", ErrorKind::Syntax),
        ("2 + (3 * 4", ErrorKind::Syntax),
    ];
    for (input, expected) in cases {
        let result = evaluator.evaluate(input);
        assert!(result.is_err(), "{:?} should fail", input);
        if let Err(e) = result {
            assert_eq!(e.kind(), expected, "{:?}", input);
        }
    }
}

#[test]
fn test_division_by_zero_message() {
    let result = Evaluator::new().evaluate("9 / 0");
    assert_eq!(result, Err(CalcError::Eval(EvalError::DivisionByZero)));
    if let Err(e) = result {
        assert_eq!(e.to_string(), "Cannot divide by zero");
    }
}

#[test]
fn test_messages_name_the_cause() {
    let evaluator = Evaluator::new();

    if let Err(e) = evaluator.evaluate("2 ** 3") {
        assert!(e.to_string().starts_with("Unsupported expression"));
    } else {
        panic!("2 ** 3 should be rejected");
    }

    if let Err(e) = evaluator.evaluate("2 +") {
        assert!(e.to_string().starts_with("Invalid syntax"));
    } else {
        panic!("2 + should be rejected");
    }
}

#[test]
fn test_custom_depth_limit() {
    let shallow = Evaluator::with_config(EvaluatorConfig { max_depth: 3 });
    assert_eq!(shallow.evaluate("1 + 2"), Ok(3.0));

    let result = shallow.evaluate("((((1))))");
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::Syntax);
    }
}

#[test]
fn test_failure_does_not_affect_next_call() {
    let evaluator = Evaluator::new();
    assert!(evaluator.evaluate("1 / 0").is_err());
    assert!(evaluator.evaluate("foo").is_err());
    assert_eq!(evaluator.evaluate("1 / 4"), Ok(0.25));
}

#[test]
fn test_concurrent_evaluation() {
    let evaluator = Evaluator::new();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let input = format!("({} + 1) * 2", i);
                evaluator.evaluate(&input)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join();
        assert!(result.is_ok());
        if let Ok(value) = result {
            assert_eq!(value, Ok(((i + 1) * 2) as f64));
        }
    }
}
