//! Output destinations for the printing words.
//!
//! `dot`, `cr`, `emit` and `print_stack` never write to stdout directly;
//! they go through the stack's print handler:
//!
//! - `Stdout`: the default;
//! - `Buffer`: captured for inspection, used by tests and embedding hosts;
//! - `Silent`: discarded.
//!
//! Dispatch is a plain enum match; there are no handler trait objects.

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes straight to stdout.
#[derive(Debug, Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn print(&self, text: &str) {
        print!("{text}");
    }

    pub fn println(&self, text: &str) {
        println!("{text}");
    }
}

/// Collects everything written into a string.
#[derive(Debug, Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print(&self, text: &str) {
        self.buffer.lock().push_str(text);
    }

    pub fn println(&self, text: &str) {
        let mut buffer = self.buffer.lock();
        buffer.push_str(text);
        buffer.push('\n');
    }

    /// Everything written so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// A print destination.
#[derive(Debug)]
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    pub fn print(&self, text: &str) {
        match self {
            Self::Stdout(h) => h.print(text),
            Self::Buffer(h) => h.print(text),
            Self::Silent => {}
        }
    }

    pub fn println(&self, text: &str) {
        match self {
            Self::Stdout(h) => h.println(text),
            Self::Buffer(h) => h.println(text),
            Self::Silent => {}
        }
    }

    /// Captured output. Empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Handle shared between a stack, its copies, and the host.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests;
