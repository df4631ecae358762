//! Builder for configured stacks.

use crate::nesting::Nesting;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::stack::{Context, Stack};

/// Builder for [`Stack`].
///
/// ```text
/// let output = buffer_handler();
/// let stack = Stack::builder()
///     .max_nesting(Some(256))
///     .print_handler(output.clone())
///     .build();
/// ```
#[derive(Default)]
pub struct StackBuilder {
    max_nesting: Option<usize>,
    print_handler: Option<SharedPrintHandler>,
    capacity: usize,
}

impl StackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of simultaneously running words. `None` (the
    /// default) leaves nesting bounded only by memory.
    #[must_use]
    pub fn max_nesting(mut self, limit: Option<usize>) -> Self {
        self.max_nesting = limit;
        self
    }

    /// Where the printing words write to. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Preallocate room for `capacity` cells.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> Stack {
        let ctx = Context {
            nesting: Nesting::new(self.max_nesting),
            print: self.print_handler.unwrap_or_else(stdout_handler),
        };
        Stack::from_parts(Vec::with_capacity(self.capacity), ctx)
    }
}
