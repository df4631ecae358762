use super::*;
use pretty_assertions::assert_eq;
use tamp_core::{StackError, StackErrorKind, Word};

/// Run `word` on `a b` and return the single cell it leaves.
fn binary(a: i64, b: i64, word: fn(&mut Stack) -> StackResult<'_>) -> Result<Cell, StackError> {
    let mut s = Stack::new();
    s.push(Cell::int(a));
    s.push(Cell::int(b));
    s.apply(word)?;
    assert_eq!(s.depth(), 1);
    s.pop()
}

#[test]
fn test_arithmetic_in_source_order() {
    assert_eq!(binary(5, 4, add).unwrap(), Cell::int(9));
    assert_eq!(binary(5, 4, sub).unwrap(), Cell::int(1));
    assert_eq!(binary(5, 4, mul).unwrap(), Cell::int(20));
    assert_eq!(binary(9, 2, div).unwrap(), Cell::int(4));
    assert_eq!(binary(-9, 2, rem).unwrap(), Cell::int(-1));
}

#[test]
fn test_comparisons() {
    assert_eq!(binary(1, 2, lt).unwrap(), Cell::boxed(true));
    assert_eq!(binary(1, 2, gt).unwrap(), Cell::boxed(false));
    assert_eq!(binary(2, 2, le).unwrap(), Cell::boxed(true));
    assert_eq!(binary(1, 2, ge).unwrap(), Cell::boxed(false));
    assert_eq!(binary(3, 3, eq).unwrap(), Cell::boxed(true));
    assert_eq!(binary(3, 4, ne).unwrap(), Cell::boxed(true));
}

#[test]
fn test_eq_across_kinds() {
    let mut s = Stack::new();
    s.apply("3").unwrap().apply(3i64).unwrap().apply(eq).unwrap();
    assert!(!s.pop_as::<bool>().unwrap());
}

#[test]
fn test_not() {
    let mut s = Stack::new();
    s.apply(true).unwrap().apply(not).unwrap();
    assert!(!s.pop_as::<bool>().unwrap());
}

#[test]
fn test_overflow_is_an_error() {
    let err = binary(i64::MAX, 1, add).unwrap_err();
    assert_eq!(err.kind, StackErrorKind::IntegerOverflow { operation: "add" });
    let err = binary(i64::MIN, -1, div).unwrap_err();
    assert_eq!(err.kind, StackErrorKind::IntegerOverflow { operation: "div" });
}

#[test]
fn test_division_by_zero() {
    assert_eq!(binary(1, 0, div).unwrap_err().kind, StackErrorKind::DivisionByZero);
    assert_eq!(binary(1, 0, rem).unwrap_err().kind, StackErrorKind::DivisionByZero);
}

#[test]
fn test_words_compose_as_values() {
    let square = Word::named("square", |s| s.dup()?.apply(mul));
    let mut s = Stack::new();
    s.apply(7i64).unwrap().apply(&square).unwrap();
    assert_eq!(s.pop_as::<i64>().unwrap(), 49);
}
