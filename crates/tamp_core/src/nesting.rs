//! Word nesting frames and native stack growth.
//!
//! Words may run other words (control flow takes its body as a word, and
//! `execute` runs whatever word it pops), so a program can nest arbitrarily
//! deep. Two guards apply:
//!
//! - **Native stack**: every word body runs under [`ensure_sufficient_stack`],
//!   which grows the native stack on demand instead of overflowing.
//! - **Nesting limit**: an optional cap on the number of simultaneously
//!   running words. Exceeding it is an ordinary `NestingLimit` error. No cap
//!   is set by default.

use tracing::debug;

use crate::errors::{nesting_limit_exceeded, StackError, WordBacktrace};

/// Minimum native stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Native stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the native stack first if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Names of the words currently running, outermost first.
#[derive(Debug, Default)]
pub(crate) struct Nesting {
    frames: Vec<&'static str>,
    max_depth: Option<usize>,
}

/// A copy keeps the limit but starts with no frames: the words running on
/// the original are not running on the copy.
impl Clone for Nesting {
    fn clone(&self) -> Self {
        Self::new(self.max_depth)
    }
}

impl Nesting {
    pub(crate) fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame for `name`, or fail if the limit is reached.
    pub(crate) fn enter(&mut self, name: &'static str) -> Result<(), StackError> {
        if let Some(limit) = self.max_depth {
            if self.frames.len() >= limit {
                debug!(limit, word = name, "nesting limit reached");
                return Err(nesting_limit_exceeded(limit).or_backtrace(|| self.capture()));
            }
        }
        self.frames.push(name);
        Ok(())
    }

    pub(crate) fn exit(&mut self) {
        debug_assert!(!self.frames.is_empty(), "unbalanced word exit");
        self.frames.pop();
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Backtrace of the running words, innermost first.
    pub(crate) fn capture(&self) -> WordBacktrace {
        WordBacktrace::new(self.frames.iter().rev().copied().collect())
    }
}

#[cfg(test)]
mod tests;
