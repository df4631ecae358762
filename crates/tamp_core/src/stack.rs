//! The LIFO value stack.
//!
//! `Stack<T>` is an unbounded, ordered sequence: the last pushed item is
//! the first popped. Stack effects in the docs below are written
//! `before -> after` with the top of the stack on the right.
//!
//! The shuffling operations work for any `T`. They check the required depth
//! up front, so a failed shuffle leaves the stack untouched. Each returns the
//! same stack so calls chain with `?`.
//!
//! `Stack<Cell>` (the default) additionally carries the apply operator,
//! typed pops, and the run context (word nesting and print handler).

use std::fmt;

use smallvec::SmallVec;

use crate::builder::StackBuilder;
use crate::cell::{Cell, FromCell};
use crate::errors::{empty_stack, underflow, StackError};
use crate::nesting::Nesting;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Result of every word: the same stack, or the failure that aborted it.
pub type StackResult<'s, T = Cell> = Result<&'s mut Stack<T>, StackError>;

/// Per-stack run context.
#[derive(Clone)]
pub(crate) struct Context {
    pub(crate) nesting: Nesting,
    pub(crate) print: SharedPrintHandler,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            nesting: Nesting::default(),
            print: stdout_handler(),
        }
    }
}

/// An unbounded last-in first-out stack of `T`.
#[derive(Clone)]
pub struct Stack<T = Cell> {
    items: Vec<T>,
    pub(crate) ctx: Context,
}

impl<T> Stack<T> {
    pub(crate) fn from_parts(items: Vec<T>, ctx: Context) -> Self {
        Self { items, ctx }
    }

    /// Number of items on the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `item` to the top. Never fails.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or_else(|| empty_stack("pop"))
    }

    /// The top item, left in place.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or_else(|| empty_stack("peek"))
    }

    /// Remove the top item (`drop`).
    pub fn drop_top(&mut self) -> StackResult<'_, T> {
        self.items.pop().ok_or_else(|| empty_stack("drop"))?;
        Ok(self)
    }

    /// Remove everything. Depth is 0 afterwards.
    pub fn remove_all(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Fail with `Underflow` unless at least `needed` items are present.
    pub fn require(&self, needed: usize, operation: &'static str) -> Result<(), StackError> {
        if self.items.len() < needed {
            return Err(underflow(operation, needed, self.items.len()));
        }
        Ok(())
    }

    /// Pop the top `count` items, returned in push order (deepest first).
    pub fn pop_n(&mut self, count: usize) -> Result<SmallVec<[T; 4]>, StackError> {
        self.require(count, "pop_n")?;
        let start = self.items.len() - count;
        Ok(self.items.drain(start..).collect())
    }

    /// Items from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    // Shuffling

    /// `a b -> b a`
    pub fn swap(&mut self) -> StackResult<'_, T> {
        self.require(2, "swap")?;
        let top = self.items.len() - 1;
        self.items.swap(top, top - 1);
        Ok(self)
    }

    /// `a b c -> b c a`
    pub fn rot(&mut self) -> StackResult<'_, T> {
        self.require(3, "rot")?;
        let start = self.items.len() - 3;
        self.items[start..].rotate_left(1);
        Ok(self)
    }

    /// `a b c -> c a b`
    pub fn right_rot(&mut self) -> StackResult<'_, T> {
        self.require(3, "right_rot")?;
        let start = self.items.len() - 3;
        self.items[start..].rotate_right(1);
        Ok(self)
    }

    /// `a b -> b`
    pub fn nip(&mut self) -> StackResult<'_, T> {
        self.require(2, "nip")?;
        let second = self.items.len() - 2;
        self.items.remove(second);
        Ok(self)
    }

    /// `a b ->`
    pub fn drop2(&mut self) -> StackResult<'_, T> {
        self.require(2, "drop2")?;
        let start = self.items.len() - 2;
        self.items.truncate(start);
        Ok(self)
    }
}

impl<T: Clone> Stack<T> {
    /// `a -> a a`
    pub fn dup(&mut self) -> StackResult<'_, T> {
        let top = self.peek().map_err(|_| empty_stack("dup"))?.clone();
        self.items.push(top);
        Ok(self)
    }

    /// `a b -> a b a b`
    pub fn dup2(&mut self) -> StackResult<'_, T> {
        self.require(2, "dup2")?;
        let start = self.items.len() - 2;
        self.items.extend_from_within(start..);
        Ok(self)
    }

    /// `a b -> a b a`
    pub fn over(&mut self) -> StackResult<'_, T> {
        self.require(2, "over")?;
        let second = self.items[self.items.len() - 2].clone();
        self.items.push(second);
        Ok(self)
    }

    /// `a b -> b a b`
    pub fn tuck(&mut self) -> StackResult<'_, T> {
        self.require(2, "tuck")?;
        let second = self.items.len() - 2;
        let top = self.items[second + 1].clone();
        self.items.insert(second, top);
        Ok(self)
    }
}

impl Stack {
    /// An empty stack with default settings.
    pub fn new() -> Self {
        StackBuilder::new().build()
    }

    pub fn builder() -> StackBuilder {
        StackBuilder::new()
    }

    /// Pop the top cell and recover it as `A`.
    ///
    /// The cell is consumed even when it does not hold an `A`.
    pub fn pop_as<A: FromCell>(&mut self) -> Result<A, StackError> {
        let cell = self.items.pop().ok_or_else(|| empty_stack(A::expected()))?;
        A::from_cell(cell)
    }

    /// Destination for the printing words.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.ctx.print
    }

    /// Number of words currently running on this stack.
    pub fn nesting_depth(&self) -> usize {
        self.ctx.nesting.depth()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::from_parts(Vec::new(), Context::default())
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_parts(iter.into_iter().collect(), Context::default())
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Renders tail to head: `T[a, b, c]H`.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("T[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]H")
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap shuffles that must succeed"
)]
