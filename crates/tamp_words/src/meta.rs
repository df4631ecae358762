//! Words as values.
//!
//! `tick` turns a word into a cell, `execute` pops such a cell and runs it.
//! Together they let a program pass behaviour around on the stack.

use tamp_core::errors::{empty_stack, not_executable};
use tamp_core::{Cell, Reference, Stack, StackResult, Word};

/// Enclose `body` in a cell so it can be pushed instead of run.
///
/// An existing [`Word`] is pushed with [`Cell::word`].
pub fn tick<F>(body: F) -> Cell
where
    F: for<'s> Fn(&'s mut Stack) -> StackResult<'s> + 'static,
{
    Cell::word(Word::new(body))
}

/// `word ->`: pop a word cell and run it.
pub fn execute(s: &mut Stack) -> StackResult<'_> {
    match s.pop().map_err(|_| empty_stack("execute"))? {
        Cell::Ref(Reference::Word(word)) => word.run(s),
        other => Err(not_executable(other.kind_name())),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap chains that must succeed"
)]
mod tests;
