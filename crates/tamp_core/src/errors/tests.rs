use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_kind_messages() {
    assert_eq!(empty_stack("pop").to_string(), "pop: stack is empty");
    assert_eq!(
        underflow("swap", 2, 1).to_string(),
        "swap needs 2 cells, stack holds 1"
    );
    assert_eq!(
        type_mismatch("integer", "text").to_string(),
        "type mismatch: expected integer, got text"
    );
    assert_eq!(not_executable("integer").to_string(), "integer is not executable");
    assert_eq!(integer_overflow("add").to_string(), "integer overflow in add");
    assert_eq!(division_by_zero().to_string(), "division by zero");
    assert_eq!(
        nesting_limit_exceeded(8).to_string(),
        "maximum word nesting exceeded (limit: 8)"
    );
    assert_eq!(custom("bad critter").to_string(), "bad critter");
}

#[test]
fn test_factories_populate_kind() {
    assert_eq!(
        type_mismatch("bool", "integer").kind,
        StackErrorKind::TypeMismatch {
            expected: "bool",
            found: "integer",
        }
    );
    assert_eq!(division_by_zero().kind, StackErrorKind::DivisionByZero);
}

#[test]
fn test_new_error_has_empty_backtrace() {
    let err = empty_stack("peek");
    assert!(err.backtrace().is_empty());
    assert_eq!(err.backtrace().to_string(), "");
}

#[test]
fn test_or_backtrace_keeps_innermost_capture() {
    let inner = WordBacktrace::new(vec!["inner", "outer"]);
    let err = empty_stack("pop").or_backtrace(|| inner.clone());
    let err = err.or_backtrace(|| WordBacktrace::new(vec!["outer"]));
    assert_eq!(err.backtrace(), &inner);
}

#[test]
fn test_backtrace_display() {
    let trace = WordBacktrace::new(vec!["dup", "fib"]);
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.to_string(), "word backtrace:\n  0: dup\n  1: fib\n");
}
