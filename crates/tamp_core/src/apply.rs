//! The apply operator.
//!
//! [`Stack::apply`] accepts anything that implements [`Operand`] for one of
//! the marker types in [`shape`]. The marker is inferred from the operand's
//! type, so callers never name it:
//!
//! | operand                                   | shape                  | effect                          |
//! |-------------------------------------------|------------------------|---------------------------------|
//! | `T: IntoCell`                             | `Push`                 | push `T` as a cell              |
//! | `u64`, `usize`, `isize`, `i128`, `u128`   | `Push`                 | push as an integer if it fits   |
//! | `for<'s> FnOnce(&'s mut Stack) -> StackResult<'s>` | `Word`        | run it on the stack             |
//! | `FnOnce(&mut Stack) -> Result<(), StackError>` | `FallibleProcedure` | run it on the stack           |
//! | `FnOnce(&mut Stack)`                      | `Procedure`            | run it on the stack             |
//! | `Word`, `&Word`                           | `WordValue`            | run it on the stack             |
//! | `FnOnce(A, .., X) -> R`, up to 6 params   | `Call<(A, .., X), R>`  | pop `X` then the rest, push `R` |
//! | `FnOnce(A) -> FnOnce(B) -> R`             | `Curried<A, B, R>`     | as `FnOnce(A, B) -> R`          |
//!
//! Arguments are taken from the stack in parameter order: the first
//! parameter is the deepest of the popped cells and the last parameter is
//! the top. `5 4 apply(|a, b| a - b)` therefore leaves `1`. For a curried
//! method like `|text| move |prefix| text.starts_with(prefix)` the receiver
//! is pushed first.
//!
//! Before popping anything an n-ary call checks that the stack holds enough
//! cells, so an underflow consumes nothing. A type mismatch is raised while
//! converting, after the arguments have been popped.

use std::any::type_name;

use tracing::trace;

use crate::adapt::{rslurry, uncurry, Remaining};
use crate::cell::{Cell, FromCell, IntoCell};
use crate::errors::{type_mismatch, underflow, StackError};
use crate::stack::{Stack, StackResult};
use crate::word::Word;

/// Marker types that keep the [`Operand`] impls apart.
pub mod shape {
    use std::marker::PhantomData;

    /// A value to push.
    pub struct Push;
    /// A word returning its stack.
    pub struct Word;
    /// A procedure on the stack that can fail.
    pub struct FallibleProcedure;
    /// A procedure on the stack that cannot fail.
    pub struct Procedure;
    /// A [`Word`](crate::Word) value.
    pub struct WordValue;
    /// An ordinary function taking `Args`.
    pub struct Call<Args, R>(PhantomData<fn(Args) -> R>);
    /// A curried two-parameter function.
    pub struct Curried<A, B, R>(PhantomData<fn(A, B) -> R>);
}

/// Something [`Stack::apply`] knows what to do with.
pub trait Operand<Shape> {
    fn apply_to(self, stack: &mut Stack) -> Result<(), StackError>;
}

/// Function results that can be put back on the stack.
///
/// `()` pushes nothing, a [`Word`] is pushed as a word cell, and an `Err`
/// aborts the chain.
pub trait Output {
    fn push_onto(self, stack: &mut Stack) -> Result<(), StackError>;
}

impl<T: IntoCell> Output for T {
    fn push_onto(self, stack: &mut Stack) -> Result<(), StackError> {
        stack.push(self.into_cell());
        Ok(())
    }
}

impl Output for () {
    fn push_onto(self, _stack: &mut Stack) -> Result<(), StackError> {
        Ok(())
    }
}

impl Output for Word {
    fn push_onto(self, stack: &mut Stack) -> Result<(), StackError> {
        stack.push(Cell::word(self));
        Ok(())
    }
}

impl<T: Output> Output for Result<T, StackError> {
    fn push_onto(self, stack: &mut Stack) -> Result<(), StackError> {
        self?.push_onto(stack)
    }
}

// Integers wider than a cell are checked when pushed.
macro_rules! wide_int_output {
    ($($ty:ty),*) => {
        $(impl Output for $ty {
            fn push_onto(self, stack: &mut Stack) -> Result<(), StackError> {
                let value = i64::try_from(self)
                    .map_err(|_| type_mismatch("integer", "out-of-range integer"))?;
                stack.push(Cell::int(value));
                Ok(())
            }
        }

        impl Operand<shape::Push> for $ty {
            fn apply_to(self, stack: &mut Stack) -> Result<(), StackError> {
                self.push_onto(stack)
            }
        }
        )*
    };
}

wide_int_output!(u64, usize, isize, i128, u128);

impl Stack {
    /// Apply `operand` to the stack and hand the stack back.
    ///
    /// See the [module docs](self) for what each kind of operand does.
    pub fn apply<S>(&mut self, operand: impl Operand<S>) -> StackResult<'_> {
        operand.apply_to(self)?;
        Ok(self)
    }
}

// Values

impl<T: IntoCell> Operand<shape::Push> for T {
    fn apply_to(self, stack: &mut Stack) -> Result<(), StackError> {
        let cell = self.into_cell();
        trace!(depth = stack.depth(), %cell, "push");
        stack.push(cell);
        Ok(())
    }
}

// Words

impl<F> Operand<shape::Word> for F
where
    F: for<'s> FnOnce(&'s mut Stack) -> StackResult<'s>,
{
    fn apply_to(self, stack: &mut Stack) -> Result<(), StackError> {
        stack.invoke(type_name::<F>(), |s| self(s).map(|_| ()))
    }
}

impl<F> Operand<shape::FallibleProcedure> for F
where
    F: FnOnce(&mut Stack) -> Result<(), StackError>,
{
    fn apply_to(self, stack: &mut Stack) -> Result<(), StackError> {
        stack.invoke(type_name::<F>(), self)
    }
}

impl<F> Operand<shape::Procedure> for F
where
    F: FnOnce(&mut Stack),
{
    fn apply_to(self, stack: &mut Stack) -> Result<(), StackError> {
        stack.invoke(type_name::<F>(), |s| {
            self(s);
            Ok(())
        })
    }
}

impl Operand<shape::WordValue> for Word {
    fn apply_to(self, stack: &mut Stack) -> Result<(), StackError> {
        self.run(stack).map(|_| ())
    }
}

impl Operand<shape::WordValue> for &Word {
    fn apply_to(self, stack: &mut Stack) -> Result<(), StackError> {
        self.run(stack).map(|_| ())
    }
}

// Functions

impl<F, R> Operand<shape::Call<(), R>> for F
where
    F: FnOnce() -> R,
    R: Output,
{
    fn apply_to(self, stack: &mut Stack) -> Result<(), StackError> {
        self().push_onto(stack)
    }
}

/// Next argument from the cells popped below the top one.
fn next_argument<A: FromCell>(rest: &mut impl Iterator<Item = Cell>) -> Result<A, StackError> {
    rest.next()
        .map_or_else(|| Err(underflow(A::expected(), 1, 0)), A::from_cell)
}

macro_rules! call_shape {
    ($arity:literal; [$($arg:ident $var:ident),*] $last:ident $last_var:ident) => {
        impl<F, $($arg,)* $last, R> Operand<shape::Call<($($arg,)* $last,), R>> for F
        where
            F: FnOnce($($arg,)* $last) -> R,
            $($arg: FromCell,)*
            $last: FromCell,
            R: Output,
        {
            fn apply_to(self, stack: &mut Stack) -> Result<(), StackError> {
                stack.require($arity, type_name::<F>())?;
                let $last_var: $last = stack.pop_as()?;
                let bound = rslurry(self)($last_var);
                #[allow(unused_mut, unused_variables)]
                let mut rest = stack.pop_n($arity - 1)?.into_iter();
                $(let $var: $arg = next_argument(&mut rest)?;)*
                trace!(arity = $arity, function = type_name::<F>(), "call");
                bound.call(($($var,)*)).push_onto(stack)
            }
        }
    };
}

call_shape!(1; [] X x);
call_shape!(2; [A a] X x);
call_shape!(3; [A a, B b] X x);
call_shape!(4; [A a, B b, C c] X x);
call_shape!(5; [A a, B b, C c, D d] X x);
call_shape!(6; [A a, B b, C c, D d, E e] X x);

impl<F, G, A, B, R> Operand<shape::Curried<A, B, R>> for F
where
    F: FnOnce(A) -> G,
    G: FnOnce(B) -> R,
    A: FromCell,
    B: FromCell,
    R: Output,
{
    fn apply_to(self, stack: &mut Stack) -> Result<(), StackError> {
        Operand::<shape::Call<(A, B), R>>::apply_to(uncurry(self), stack)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap chains that must succeed"
)]
