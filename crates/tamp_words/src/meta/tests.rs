use super::*;
use crate::shuffle::{dup, over, swap};
use pretty_assertions::assert_eq;
use tamp_core::StackErrorKind;

#[test]
fn test_tick_pushes_without_running() {
    let mut s = Stack::new();
    s.apply(1i64).unwrap().apply(tick(dup)).unwrap();
    assert_eq!(s.depth(), 2);
    assert_eq!(s.peek().unwrap().kind_name(), "word");
}

#[test]
fn test_execute_runs_ticked_word() {
    let mut s = Stack::new();
    s.apply(1i64)
        .unwrap()
        .apply(tick(dup))
        .unwrap()
        .apply(execute)
        .unwrap();
    assert_eq!(s.as_slice(), &[Cell::int(1), Cell::int(1)]);
}

#[test]
fn test_execute_keeps_copy_with_over() {
    // 5 'dup swap over execute: the word stays below its own result.
    let mut s = Stack::new();
    s.apply(5i64)
        .unwrap()
        .apply(tick(dup))
        .unwrap()
        .apply(swap)
        .unwrap()
        .apply(over)
        .unwrap()
        .apply(execute)
        .unwrap();
    assert_eq!(s.depth(), 3);
    assert_eq!(s.pop_as::<i64>().unwrap(), 5);
    assert_eq!(s.pop_as::<i64>().unwrap(), 5);
    assert_eq!(s.pop().unwrap().kind_name(), "word");
}

#[test]
fn test_execute_shared_word_cell() {
    let word = Word::named("push_one", |s| s.apply(1i64));
    let mut s = Stack::new();
    s.push(Cell::word(word.clone()));
    s.apply(execute).unwrap();
    s.push(Cell::word(word));
    s.apply(execute).unwrap();
    assert_eq!(s.as_slice(), &[Cell::int(1), Cell::int(1)]);
}

#[test]
fn test_execute_rejects_non_words() {
    let mut s = Stack::new();
    let err = s.apply("dup").unwrap().apply(execute).unwrap_err();
    assert_eq!(err.kind, StackErrorKind::NotExecutable { found: "text" });
    assert!(s.is_empty());
}

#[test]
fn test_execute_on_empty_stack() {
    let mut s = Stack::new();
    let err = s.apply(execute).unwrap_err();
    assert_eq!(
        err.kind,
        StackErrorKind::EmptyStack {
            operation: "execute"
        }
    );
}
