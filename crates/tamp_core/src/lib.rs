//! Tamp Core - the concatenative stack engine.
//!
//! Everything a program does happens through one operation, [`Stack::apply`],
//! which takes an operand and does the right thing with it:
//!
//! - a plain value is wrapped in a [`Cell`] and pushed;
//! - a word (`&mut Stack -> StackResult`) is invoked on the stack;
//! - an ordinary function of up to [`MAX_ARITY`] parameters has its arguments
//!   popped off the stack and its result pushed back;
//! - a method-shaped curried function `a -> b -> c` is uncurried first.
//!
//! `apply` hands back the same stack, so programs read left to right:
//!
//! ```text
//! stack.apply(5)?.apply(4)?.apply(|a: i64, b: i64| a - b)?;   // leaves 1
//! ```
//!
//! # Architecture
//!
//! - `cell`: the tagged [`Cell`] value and the [`IntoCell`]/[`FromCell`] conversions
//! - `stack`: the LIFO [`Stack`] and its shuffling operations
//! - `adapt`: slurry, right-slurry and uncurry
//! - `apply`: the [`Operand`] shapes behind `apply`
//! - `word`: named, shareable [`Word`] values
//! - `nesting`: word nesting frames, limits and native stack growth
//! - `errors`: [`StackError`] and its factory functions

mod adapt;
mod apply;
mod builder;
mod cell;
pub mod errors;
mod heap;
mod nesting;
mod print_handler;
mod stack;
mod word;

pub use adapt::{rslurry, slurry, uncurry, Remaining, RightSlurried, Slurried, MAX_ARITY};
pub use apply::{shape, Operand, Output};
pub use builder::StackBuilder;
pub use cell::{Boxed, Cell, FromCell, IntoCell, Opaque, Reference};
pub use errors::{StackError, StackErrorKind, WordBacktrace};
pub use heap::Heap;
pub use nesting::ensure_sufficient_stack;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::{Stack, StackResult};
pub use word::Word;
