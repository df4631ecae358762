use super::*;
use crate::arith::{add, gt};
use crate::shuffle::{drop, dup};
use pretty_assertions::assert_eq;
use tamp_core::StackErrorKind;

/// Body that increments the integer on top of the stack.
fn bump(s: &mut Stack) -> StackResult<'_> {
    s.apply(1i64)?.apply(add)
}

/// How many times `loop_` runs its body for `bound start`.
fn runs_of(start: i64, bound: i64) -> i64 {
    let mut s = Stack::new();
    s.apply(0i64)
        .unwrap()
        .apply(bound)
        .unwrap()
        .apply(start)
        .unwrap()
        .apply(loop_(bump))
        .unwrap();
    s.pop_as().unwrap()
}

#[test]
fn test_if_runs_on_true() {
    let mut s = Stack::new();
    s.apply(5i64).unwrap().apply(true).unwrap().apply(if_(bump)).unwrap();
    assert_eq!(s.pop_as::<i64>().unwrap(), 6);
}

#[test]
fn test_if_skips_on_false() {
    let mut s = Stack::new();
    s.apply(5i64).unwrap().apply(false).unwrap().apply(if_(bump)).unwrap();
    assert_eq!(s.pop_as::<i64>().unwrap(), 5);
}

#[test]
fn test_if_else_picks_branch() {
    let word = if_else(dup, drop);
    let mut s = Stack::new();
    s.apply(7i64).unwrap().apply(true).unwrap().apply(&word).unwrap();
    assert_eq!(s.depth(), 2);
    s.apply(false).unwrap().apply(&word).unwrap();
    assert_eq!(s.depth(), 1);
}

#[test]
fn test_if_needs_bool() {
    let mut s = Stack::new();
    let err = s.apply(1i64).unwrap().apply(if_(dup)).unwrap_err();
    assert_eq!(
        err.kind,
        StackErrorKind::TypeMismatch {
            expected: "bool",
            found: "integer",
        }
    );
    assert_eq!(err.backtrace().frames(), &["if"]);
}

#[test]
fn test_while_counts_down() {
    // 3 true while{ 1 sub dup 0 gt } leaves 0 after three rounds.
    let mut rounds = Stack::new();
    let countdown = while_(|s| {
        s.apply(|n: i64| n - 1)?
            .apply(dup)?
            .apply(0i64)?
            .apply(gt)
    });
    rounds
        .apply(3i64)
        .unwrap()
        .apply(true)
        .unwrap()
        .apply(countdown)
        .unwrap();
    assert_eq!(rounds.as_slice(), &[Cell::int(0)]);
}

#[test]
fn test_while_false_skips_body() {
    let mut s = Stack::new();
    s.apply(false).unwrap().apply(while_(bump)).unwrap();
    assert!(s.is_empty());
}

#[test]
fn test_loop_run_counts() {
    assert_eq!(runs_of(0, 5), 5);
    assert_eq!(runs_of(5, 0), 5);
    assert_eq!(runs_of(3, 3), 0);
    assert_eq!(runs_of(-2, 2), 4);
}

#[test]
fn test_loop_near_integer_limits_does_not_wrap() {
    assert_eq!(runs_of(i64::MAX - 2, i64::MAX), 2);
    assert_eq!(runs_of(i64::MIN, i64::MIN + 3), 3);
    assert_eq!(runs_of(i64::MIN + 1, i64::MIN), 1);
}

#[test]
fn test_loop_cnt_exposes_index() {
    let mut s = Stack::new();
    s.apply(3i64)
        .unwrap()
        .apply(0i64)
        .unwrap()
        .apply(loop_cnt(|s| Ok(s)))
        .unwrap();
    assert_eq!(s.as_slice(), &[Cell::int(0), Cell::int(1), Cell::int(2)]);
}

#[test]
fn test_loop_cnt_counts_down() {
    let mut s = Stack::new();
    s.apply(0i64)
        .unwrap()
        .apply(3i64)
        .unwrap()
        .apply(loop_cnt(|s| Ok(s)))
        .unwrap();
    assert_eq!(s.as_slice(), &[Cell::int(3), Cell::int(2), Cell::int(1)]);
}

#[test]
fn test_loop_underflow_consumes_nothing() {
    let mut s = Stack::new();
    let err = s.apply(4i64).unwrap().apply(loop_(bump)).unwrap_err();
    assert_eq!(
        err.kind,
        StackErrorKind::Underflow {
            operation: "loop",
            needed: 2,
            depth: 1,
        }
    );
    assert_eq!(s.as_slice(), &[Cell::int(4)]);
}

#[test]
fn test_nested_loops() {
    // 0 3 0 loop{ 2 0 loop{ 1 add } } leaves 6.
    let mut s = Stack::new();
    s.apply(0i64)
        .unwrap()
        .apply(3i64)
        .unwrap()
        .apply(0i64)
        .unwrap()
        .apply(loop_(|s| s.apply(2i64)?.apply(0i64)?.apply(loop_(bump))))
        .unwrap();
    assert_eq!(s.pop_as::<i64>().unwrap(), 6);
}

#[test]
fn test_indices_never_wrap() {
    assert_eq!(indices(1, 4).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(indices(4, 1).collect::<Vec<_>>(), vec![4, 3, 2]);
    assert_eq!(indices(i64::MAX, i64::MAX).count(), 0);
}

#[test]
fn test_word_values_as_bodies() {
    let grow = Word::named("grow", |s| s.apply(10i64));
    let shrink = Word::named("shrink", |s| s.apply(-10i64));
    let pick = if_else(grow.into_fn(), shrink.into_fn());

    let mut s = Stack::new();
    s.apply(true).unwrap().apply(&pick).unwrap();
    s.apply(false).unwrap().apply(&pick).unwrap();
    assert_eq!(s.as_slice(), &[Cell::int(10), Cell::int(-10)]);

    let counted = loop_(Word::named("bump", bump).into_fn());
    s.apply(0i64)
        .unwrap()
        .apply(3i64)
        .unwrap()
        .apply(0i64)
        .unwrap()
        .apply(&counted)
        .unwrap();
    assert_eq!(s.pop_as::<i64>().unwrap(), 3);
}
