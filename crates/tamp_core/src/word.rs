//! Words: named, shareable stack procedures.
//!
//! A word is anything of shape `&mut Stack -> StackResult`. Plain functions
//! and closures of that shape are applied directly; wrapping one in a
//! [`Word`] gives it a name and makes it a value that can be cloned, stored
//! in a cell (see `tick`) and run later.

use std::any::type_name;
use std::fmt;
use std::rc::Rc;

use crate::errors::StackError;
use crate::nesting::ensure_sufficient_stack;
use crate::stack::{Stack, StackResult};

type WordBody = dyn for<'s> Fn(&'s mut Stack) -> StackResult<'s>;

/// A named stack procedure. Clones share the body.
#[derive(Clone)]
pub struct Word {
    name: &'static str,
    body: Rc<WordBody>,
}

impl Word {
    /// Wrap `body`, naming the word after its Rust type.
    pub fn new<F>(body: F) -> Self
    where
        F: for<'s> Fn(&'s mut Stack) -> StackResult<'s> + 'static,
    {
        Self::named(type_name::<F>(), body)
    }

    pub fn named<F>(name: &'static str, body: F) -> Self
    where
        F: for<'s> Fn(&'s mut Stack) -> StackResult<'s> + 'static,
    {
        Word {
            name,
            body: Rc::new(body),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the word on `stack`.
    pub fn run<'s>(&self, stack: &'s mut Stack) -> StackResult<'s> {
        stack.invoke(self.name, |s| (self.body)(s).map(|_| ()))?;
        Ok(stack)
    }

    /// The word as a plain body, for the builders that take one:
    /// `if_else(grow.into_fn(), die.into_fn())`.
    pub fn into_fn(self) -> impl for<'s> Fn(&'s mut Stack) -> StackResult<'s> + 'static {
        move |s| self.run(s)
    }

    /// Whether both words share one body.
    pub fn ptr_eq(a: &Word, b: &Word) -> bool {
        Rc::ptr_eq(&a.body, &b.body)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Word").field(&self.name).finish()
    }
}

impl Stack {
    /// Run `body` as the word `name`: one nesting frame, native stack
    /// growth, and a backtrace attached to any error it returns.
    #[tracing::instrument(level = "trace", skip_all, fields(word = name))]
    pub(crate) fn invoke(
        &mut self,
        name: &'static str,
        body: impl FnOnce(&mut Stack) -> Result<(), StackError>,
    ) -> Result<(), StackError> {
        self.ctx.nesting.enter(name)?;
        let result = ensure_sufficient_stack(|| body(self))
            .map_err(|err| err.or_backtrace(|| self.ctx.nesting.capture()));
        self.ctx.nesting.exit();
        result
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap runs that must succeed"
)]
