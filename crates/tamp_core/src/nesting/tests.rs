use super::*;
use crate::errors::StackErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn test_enter_exit_tracks_depth() {
    let mut nesting = Nesting::default();
    assert!(nesting.enter("outer").is_ok());
    assert!(nesting.enter("inner").is_ok());
    assert_eq!(nesting.depth(), 2);
    nesting.exit();
    assert_eq!(nesting.depth(), 1);
}

#[test]
fn test_capture_is_innermost_first() {
    let mut nesting = Nesting::default();
    assert!(nesting.enter("fib").is_ok());
    assert!(nesting.enter("loop").is_ok());
    assert!(nesting.enter("add").is_ok());
    assert_eq!(nesting.capture().frames(), &["add", "loop", "fib"]);
}

#[test]
fn test_limit_rejects_extra_frame() {
    let mut nesting = Nesting::new(Some(2));
    assert!(nesting.enter("a").is_ok());
    assert!(nesting.enter("b").is_ok());
    let Err(err) = nesting.enter("c") else {
        panic!("third frame must exceed a limit of 2");
    };
    assert_eq!(err.kind, StackErrorKind::NestingLimit { limit: 2 });
    assert_eq!(err.backtrace().frames(), &["b", "a"]);
    assert_eq!(nesting.depth(), 2);
}

#[test]
fn test_ensure_sufficient_stack_returns_value() {
    assert_eq!(ensure_sufficient_stack(|| 40 + 2), 42);
}

#[test]
fn test_deep_recursion_survives() {
    fn count_down(n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            ensure_sufficient_stack(|| 1 + count_down(n - 1))
        }
    }

    assert_eq!(count_down(100_000), 100_000);
}

#[test]
fn test_clone_drops_running_frames() {
    let mut nesting = Nesting::new(Some(1));
    assert!(nesting.enter("outer").is_ok());
    let mut copy = nesting.clone();
    assert_eq!(copy.depth(), 0);
    assert!(copy.enter("inner").is_ok());
    let Err(err) = copy.enter("too_deep") else {
        panic!("the copy keeps the limit of 1");
    };
    assert_eq!(err.kind, StackErrorKind::NestingLimit { limit: 1 });
}
