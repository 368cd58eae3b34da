use num_bigint::BigInt;
use num_rational::BigRational;

use crate::operand::Operand;
use crate::solver::Solver;
use crate::solver::core::search;

fn rational(value: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(value))
}

/// Independent exact evaluator for solver output
///
/// Solutions are fully parenthesized except for the trimmed outermost
/// wrapper, so the grammar is: atom = number | '(' atom op atom ')', and the
/// whole string is either a single atom or `atom op atom`.
fn evaluate(expr: &str) -> BigRational {
    let (left, rest) = evaluate_atom(expr.as_bytes());
    if rest.is_empty() {
        return left;
    }
    let op = rest[0];
    let (right, rest) = evaluate_atom(&rest[1..]);
    assert!(rest.is_empty(), "unparsed tail in '{}'", expr);
    apply_op(left, op, right)
}

fn evaluate_atom(input: &[u8]) -> (BigRational, &[u8]) {
    if input.first() == Some(&b'(') {
        let (left, rest) = evaluate_atom(&input[1..]);
        let op = rest[0];
        let (right, rest) = evaluate_atom(&rest[1..]);
        assert_eq!(rest[0], b')');
        (apply_op(left, op, right), &rest[1..])
    } else {
        let end = input
            .iter()
            .position(|byte| !byte.is_ascii_digit())
            .unwrap_or(input.len());
        let number: i64 = std::str::from_utf8(&input[..end])
            .expect("ascii digits")
            .parse()
            .expect("numeric literal");
        (rational(number), &input[end..])
    }
}

fn apply_op(left: BigRational, op: u8, right: BigRational) -> BigRational {
    match op {
        b'+' => left + right,
        b'-' => left - right,
        b'*' => left * right,
        b'/' => left / right,
        other => panic!("unexpected operator byte {}", other),
    }
}

#[test]
fn test_boundary_hand_is_solved() {
    let solver = Solver::new();
    let solution = solver.solve(&[1, 2, 3, 4]).expect("1 2 3 4 makes 24");

    assert!(solution.all_positive);
    assert_eq!(evaluate(&solution.expression), rational(24));
}

#[test]
fn test_fractional_hand_needs_exact_arithmetic() {
    // 8/(3-8/3) = 24 exactly; floating point would drift
    let solver = Solver::new();
    let solution = solver.solve(&[8, 3, 3, 8]).expect("8 3 3 8 makes 24");

    assert_eq!(evaluate(&solution.expression), rational(24));
}

#[test]
fn test_unsolvable_hand_exhausts_both_passes() {
    let solver = Solver::new();
    assert_eq!(solver.solve(&[1, 1, 1, 1]), None);
}

#[test]
fn test_zero_in_hand_never_divides_by_zero() {
    let solver = Solver::new();
    let solution = solver.solve(&[0, 2, 3, 4]).expect("(0+3)*(2*4) makes 24");

    assert_eq!(evaluate(&solution.expression), rational(24));
}

#[test]
fn test_single_operand_hand() {
    let solver = Solver::new();
    let solution = solver.solve(&[24]).expect("24 alone is already 24");

    assert_eq!(solution.expression, "24");
    assert!(solution.all_positive);

    assert_eq!(solver.solve(&[23]), None);
}

#[test]
fn test_repeated_solves_are_deterministic() {
    let solver = Solver::new();
    let first = solver.solve(&[1, 2, 3, 4]).expect("solvable hand");
    let second = solver.solve(&[1, 2, 3, 4]).expect("solvable hand");

    assert_eq!(first, second);
}

#[test]
fn test_positive_pass_wins_when_possible() {
    let solver = Solver::new();
    let solution = solver.solve(&[1, 5, 5, 5]).expect("5*(5-1/5) makes 24");

    // An all-positive derivation exists, so pass 1 must report it
    assert!(solution.all_positive);
    assert_eq!(evaluate(&solution.expression), rational(24));
}

#[test]
fn test_fallback_pass_reaches_negative_targets() {
    // -1 from [1, 2] is reachable only through a non-positive result
    let solver = Solver::with_target(rational(-1));
    let solution = solver.solve(&[1, 2]).expect("1-2 makes -1");

    assert!(!solution.all_positive);
    assert_eq!(solution.expression, "1-2");
}

#[test]
fn test_search_base_case_compares_exactly() {
    let target = rational(24);
    let hit = search(&[Operand::from_integer(24)], false, &target);
    assert_eq!(hit.map(|operand| operand.text().to_string()), Some("24".into()));

    let miss = search(&[Operand::from_integer(25)], false, &target);
    assert!(miss.is_none());
}

#[test]
fn test_search_returns_fully_parenthesized_text() {
    let target = rational(24);
    let items: Vec<Operand> = [1, 2, 3, 4].iter().map(|&v| Operand::from_integer(v)).collect();
    let found = search(&items, true, &target).expect("solvable hand");

    // Untrimmed search output always carries the outer wrapper
    let text = found.text();
    assert!(text.starts_with('('));
    assert!(text.ends_with(')'));
    assert_eq!(evaluate(text), rational(24));
}
