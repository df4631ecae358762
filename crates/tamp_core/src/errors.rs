//! Error types for stack evaluation.
//!
//! `StackErrorKind` names the failure, `StackError` pairs it with a snapshot
//! of the words that were running when it happened. Factory functions
//! (`empty_stack()`, `type_mismatch()`, ...) are the public way to build
//! errors; host words that need their own failure use [`custom`].
//!
//! Every failure is an ordinary `Err`: an empty stack, a cell of the wrong
//! type, or a cell that cannot be executed all abort the current chain and
//! leave the stack as it was at the point of failure. Nothing is rolled back.

use std::fmt;

/// Typed failure category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StackErrorKind {
    // Depth
    #[error("{operation}: stack is empty")]
    EmptyStack { operation: &'static str },
    #[error("{operation} needs {needed} cells, stack holds {depth}")]
    Underflow {
        operation: &'static str,
        needed: usize,
        depth: usize,
    },

    // Type
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("{found} is not executable")]
    NotExecutable { found: &'static str },

    // Arithmetic
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("division by zero")]
    DivisionByZero,

    // Nesting
    #[error("maximum word nesting exceeded (limit: {limit})")]
    NestingLimit { limit: usize },

    /// Failure raised by a host-defined word.
    #[error("{message}")]
    Custom { message: String },
}

/// Snapshot of the words being executed when an error was raised.
///
/// Frames are ordered innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBacktrace {
    frames: Vec<&'static str>,
}

impl WordBacktrace {
    pub fn new(frames: Vec<&'static str>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[&'static str] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for WordBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "word backtrace:")?;
        for (i, name) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {name}")?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{kind}")]
pub struct StackError {
    /// Structured failure category.
    pub kind: StackErrorKind,
    trace: WordBacktrace,
}

impl StackError {
    pub fn new(kind: StackErrorKind) -> Self {
        Self {
            kind,
            trace: WordBacktrace::default(),
        }
    }

    /// Words that were running when the error was raised.
    pub fn backtrace(&self) -> &WordBacktrace {
        &self.trace
    }

    /// Attach a backtrace unless one was already captured deeper down.
    #[must_use]
    pub fn or_backtrace(mut self, capture: impl FnOnce() -> WordBacktrace) -> Self {
        if self.trace.is_empty() {
            self.trace = capture();
        }
        self
    }
}

impl From<StackErrorKind> for StackError {
    fn from(kind: StackErrorKind) -> Self {
        Self::new(kind)
    }
}

// Depth Errors

/// `operation` was attempted on an empty stack.
#[cold]
pub fn empty_stack(operation: &'static str) -> StackError {
    StackErrorKind::EmptyStack { operation }.into()
}

/// `operation` needs `needed` cells but only `depth` are available.
#[cold]
pub fn underflow(operation: &'static str, needed: usize, depth: usize) -> StackError {
    StackErrorKind::Underflow {
        operation,
        needed,
        depth,
    }
    .into()
}

// Type Errors

/// A typed pop found a cell of a different kind.
#[cold]
pub fn type_mismatch(expected: &'static str, found: &'static str) -> StackError {
    StackErrorKind::TypeMismatch { expected, found }.into()
}

/// `execute` popped something that is not a word.
#[cold]
pub fn not_executable(found: &'static str) -> StackError {
    StackErrorKind::NotExecutable { found }.into()
}

// Arithmetic Errors

#[cold]
pub fn integer_overflow(operation: &'static str) -> StackError {
    StackErrorKind::IntegerOverflow { operation }.into()
}

#[cold]
pub fn division_by_zero() -> StackError {
    StackErrorKind::DivisionByZero.into()
}

// Nesting Errors

#[cold]
pub fn nesting_limit_exceeded(limit: usize) -> StackError {
    StackErrorKind::NestingLimit { limit }.into()
}

// Host Errors

/// Failure with a free-form message, for words defined outside the engine.
#[cold]
pub fn custom(message: impl Into<String>) -> StackError {
    StackErrorKind::Custom {
        message: message.into(),
    }
    .into()
}

#[cfg(test)]
mod tests;
