//! Iterative Fibonacci.

use tamp_core::{Stack, StackResult};

use crate::arith::add;
use crate::control::loop_;
use crate::shuffle::{drop, over, rot, swap};

/// `n -> fib(n)`
///
/// `0 1 rot 0 loop{ over add swap } drop`. The largest result that fits in
/// an `i64` is `fib(92)`; beyond that `add` reports an overflow.
pub fn fib(s: &mut Stack) -> StackResult<'_> {
    s.apply(0i64)?
        .apply(1i64)?
        .apply(rot)?
        .apply(0i64)?
        .apply(loop_(|s| s.apply(over)?.apply(add)?.apply(swap)))?
        .apply(drop)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap chains that must succeed"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tamp_core::StackErrorKind;

    fn fib_of(n: i64) -> Result<i64, tamp_core::StackError> {
        let mut s = Stack::new();
        s.apply(n)?.apply(fib)?;
        s.pop_as()
    }

    #[test]
    fn small_values() {
        let values: Vec<i64> = (0..10).map(|n| fib_of(n).unwrap()).collect();
        assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn fib_92_fits() {
        assert_eq!(fib_of(92).unwrap(), 7_540_113_804_746_346_429);
    }

    #[test]
    fn fib_93_overflows() {
        let err = fib_of(93).unwrap_err();
        assert_eq!(err.kind, StackErrorKind::IntegerOverflow { operation: "add" });
    }

    #[test]
    fn leaves_only_the_result() {
        let mut s = Stack::new();
        s.apply(10i64).unwrap().apply(fib).unwrap();
        assert_eq!(s.depth(), 1);
    }
}
