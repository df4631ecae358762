//! The tamp vocabulary.
//!
//! Every primitive here is a word: a function or [`Word`](tamp_core::Word)
//! of shape `&mut Stack -> StackResult`, applied with `Stack::apply`. Stack
//! effects are written `before -> after`, top of the stack on the right.
//!
//! - [`shuffle`]: `drop`, `dup`, `swap`, `rot`, ...
//! - [`control`]: `if_`, `if_else`, `while_`, `loop_`, `loop_cnt`
//! - [`arith`]: checked integer arithmetic and comparisons
//! - [`io`]: `dot`, `cr`, `emit`, `depth`, `print_stack`
//! - [`meta`]: `tick` and `execute`
//! - [`fib`]: the iterative Fibonacci word

pub mod arith;
pub mod control;
pub mod fib;
pub mod io;
pub mod meta;
pub mod shuffle;

pub use arith::{add, div, eq, ge, gt, le, lt, mul, ne, not, rem, sub};
pub use control::{if_, if_else, loop_, loop_cnt, while_};
pub use fib::fib;
pub use io::{cr, depth, dot, emit, print_stack};
pub use meta::{execute, tick};
pub use shuffle::{drop, drop2, drop_all, dup, dup2, nip, over, right_rot, rot, swap, tuck};
