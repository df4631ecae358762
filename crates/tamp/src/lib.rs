//! Tamp: a concatenative stack engine.
//!
//! A program is a chain of [`Stack::apply`](tamp_core::Stack::apply) calls.
//! Values are pushed, words run, and plain Rust functions take their
//! arguments from the stack:
//!
//! ```text
//! use tamp::prelude::*;
//!
//! let mut s = Stack::new();
//! s.apply(92i64)?.apply(fib)?;
//! assert_eq!(s.pop_as::<i64>()?, 7_540_113_804_746_346_429);
//!
//! s.apply(5i64)?.apply(4i64)?.apply(|a: i64, b: i64| a - b)?;   // 1
//! ```
//!
//! The engine lives in [`tamp_core`]; the vocabulary in [`tamp_words`].

use std::sync::Once;

pub use tamp_core;
pub use tamp_words;

/// Everything needed to write programs.
pub mod prelude {
    pub use tamp_core::{
        buffer_handler, silent_handler, stdout_handler, Cell, FromCell, IntoCell, Opaque,
        SharedPrintHandler, Stack, StackBuilder, StackError, StackErrorKind, StackResult, Word,
    };
    pub use tamp_words::*;
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for debug output.
///
/// Safe to call more than once. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=tamp_core=trace` to see every push, call and word.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_ok() {
                tracing::debug!("tracing initialized");
            }
        }
    });
}
