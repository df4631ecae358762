//! Integer arithmetic and comparison words.
//!
//! All of these are ordinary functions run through `apply`, so arguments
//! are in source order: `a b sub` is `a - b`, `a b lt` is `a < b`.
//! Arithmetic is checked; overflow and division by zero are errors.

use tamp_core::errors::{division_by_zero, integer_overflow};
use tamp_core::{Cell, Stack, StackResult};

/// `a b -> a+b`
pub fn add(s: &mut Stack) -> StackResult<'_> {
    s.apply(|a: i64, b: i64| a.checked_add(b).ok_or_else(|| integer_overflow("add")))
}

/// `a b -> a-b`
pub fn sub(s: &mut Stack) -> StackResult<'_> {
    s.apply(|a: i64, b: i64| a.checked_sub(b).ok_or_else(|| integer_overflow("sub")))
}

/// `a b -> a*b`
pub fn mul(s: &mut Stack) -> StackResult<'_> {
    s.apply(|a: i64, b: i64| a.checked_mul(b).ok_or_else(|| integer_overflow("mul")))
}

/// `a b -> a/b`, truncating toward zero.
pub fn div(s: &mut Stack) -> StackResult<'_> {
    s.apply(|a: i64, b: i64| {
        if b == 0 {
            return Err(division_by_zero());
        }
        a.checked_div(b).ok_or_else(|| integer_overflow("div"))
    })
}

/// `a b -> a%b`, with the sign of `a`.
pub fn rem(s: &mut Stack) -> StackResult<'_> {
    s.apply(|a: i64, b: i64| {
        if b == 0 {
            return Err(division_by_zero());
        }
        a.checked_rem(b).ok_or_else(|| integer_overflow("rem"))
    })
}

// Comparison

/// `a b -> a==b` for cells of any kind.
pub fn eq(s: &mut Stack) -> StackResult<'_> {
    s.apply(|a: Cell, b: Cell| a == b)
}

/// `a b -> a!=b` for cells of any kind.
pub fn ne(s: &mut Stack) -> StackResult<'_> {
    s.apply(|a: Cell, b: Cell| a != b)
}

/// `a b -> a<b`
pub fn lt(s: &mut Stack) -> StackResult<'_> {
    s.apply(|a: i64, b: i64| a < b)
}

/// `a b -> a>b`
pub fn gt(s: &mut Stack) -> StackResult<'_> {
    s.apply(|a: i64, b: i64| a > b)
}

/// `a b -> a<=b`
pub fn le(s: &mut Stack) -> StackResult<'_> {
    s.apply(|a: i64, b: i64| a <= b)
}

/// `a b -> a>=b`
pub fn ge(s: &mut Stack) -> StackResult<'_> {
    s.apply(|a: i64, b: i64| a >= b)
}

/// `bool -> !bool`
pub fn not(s: &mut Stack) -> StackResult<'_> {
    s.apply(|b: bool| !b)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap chains that must succeed"
)]
mod tests;
