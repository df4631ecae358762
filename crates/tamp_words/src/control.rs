//! Control flow words.
//!
//! Each function takes its body (or bodies) and returns a [`Word`]. Bodies
//! run through `apply`, so they may themselves apply control words. A body
//! can be a word-shaped function or closure, or an existing [`Word`] through
//! [`Word::into_fn`].
//!
//! | Word                | Effect          |                                                  |
//! |---------------------|-----------------|--------------------------------------------------|
//! | `if_(then)`         | `bool -> ...`   | run `then` if true                               |
//! | `if_else(then, el)` | `bool -> ...`   | run `then` if true, `el` otherwise               |
//! | `while_(body)`      | `bool -> ...`   | while the popped bool is true, run `body`        |
//! | `loop_(body)`       | `bound i -> ...`| run `body` `abs(bound - i)` times               |
//! | `loop_cnt(body)`    | `bound i -> ...`| as `loop_`, pushing the index before each run    |
//!
//! `while_` pops a fresh bool after every run, so the body must leave one
//! on top. A body that always leaves `true` loops forever.

use std::iter;

use tamp_core::{Cell, Stack, StackError, StackResult, Word};
use tracing::debug;

/// `bool -> ...`: run `then` when the popped bool is true.
pub fn if_<F>(then: F) -> Word
where
    F: for<'s> Fn(&'s mut Stack) -> StackResult<'s> + 'static,
{
    Word::named("if", move |s| {
        if s.pop_as::<bool>()? {
            s.apply(&then)
        } else {
            Ok(s)
        }
    })
}

/// `bool -> ...`: run `then` or `otherwise` depending on the popped bool.
pub fn if_else<F, G>(then: F, otherwise: G) -> Word
where
    F: for<'s> Fn(&'s mut Stack) -> StackResult<'s> + 'static,
    G: for<'s> Fn(&'s mut Stack) -> StackResult<'s> + 'static,
{
    Word::named("if_else", move |s| {
        if s.pop_as::<bool>()? {
            s.apply(&then)
        } else {
            s.apply(&otherwise)
        }
    })
}

/// `bool -> ...`: pop a bool; while it is true, run `body` and pop again.
pub fn while_<F>(body: F) -> Word
where
    F: for<'s> Fn(&'s mut Stack) -> StackResult<'s> + 'static,
{
    Word::named("while", move |s| {
        let mut rounds: u64 = 0;
        while s.pop_as::<bool>()? {
            s.apply(&body)?;
            rounds += 1;
        }
        debug!(rounds, "while finished");
        Ok(s)
    })
}

/// Indices from `start` towards `bound`, excluding `bound`.
///
/// Steps by one in whichever direction reaches `bound`, so the count is
/// always `abs(bound - start)` and the walk never wraps.
fn indices(start: i64, bound: i64) -> impl Iterator<Item = i64> {
    let step: i64 = if start < bound { 1 } else { -1 };
    iter::successors(Some(start), move |&i| i.checked_add(step)).take_while(move |&i| i != bound)
}

/// Pop the loop index (top) and the bound beneath it.
fn loop_bounds(s: &mut Stack, operation: &'static str) -> Result<(i64, i64), StackError> {
    s.require(2, operation)?;
    let start: i64 = s.pop_as()?;
    let bound: i64 = s.pop_as()?;
    debug!(start, bound, iterations = start.abs_diff(bound), "{operation} starting");
    Ok((start, bound))
}

/// `bound i -> ...`: run `body` once per step from `i` towards `bound`.
///
/// Bounds may come in either order: `0 5 loop` and `5 0 loop` both run
/// five times, `3 3 loop` not at all.
pub fn loop_<F>(body: F) -> Word
where
    F: for<'s> Fn(&'s mut Stack) -> StackResult<'s> + 'static,
{
    Word::named("loop", move |s| {
        let (start, bound) = loop_bounds(s, "loop")?;
        for _ in indices(start, bound) {
            s.apply(&body)?;
        }
        Ok(s)
    })
}

/// `bound i -> ...`: as [`loop_`], but pushes the current index before each
/// run of `body`.
pub fn loop_cnt<F>(body: F) -> Word
where
    F: for<'s> Fn(&'s mut Stack) -> StackResult<'s> + 'static,
{
    Word::named("loop_cnt", move |s| {
        let (start, bound) = loop_bounds(s, "loop_cnt")?;
        for i in indices(start, bound) {
            s.push(Cell::int(i));
            s.apply(&body)?;
        }
        Ok(s)
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap chains that must succeed"
)]
mod tests;
